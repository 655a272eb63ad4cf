use clap::Parser;
use glam::Vec3A;
use log::{debug, error, info};

mod cli;
mod logger;

use cli::Args;
use glint::{save_frame, Camera, Light, Material, Result, Scene, Sphere};
use logger::init_logger;

/// Demo scene: a few spheres of mixed materials, lit from the left.
///
/// The camera only sees the upper-left quarter of its field of view, so
/// everything sits at negative x and non-negative y.
fn create_scene() -> Result<Scene> {
    let ivory = Material::glossy(Vec3A::new(0.4, 0.4, 0.3), 50.0, 0.6);
    let red_rubber = Material::glossy(Vec3A::new(0.3, 0.1, 0.1), 10.0, 0.1);
    let jade = Material::glossy(Vec3A::new(0.1, 0.35, 0.2), 80.0, 0.4);
    let mirror = Material::mirror(0.8);

    let mut scene = Scene::new();
    scene
        .add_sphere(Sphere::new(Vec3A::new(-3.0, 0.5, 16.0), 2.0, ivory)?)
        .add_sphere(Sphere::new(Vec3A::new(-1.0, 2.5, 12.0), 2.0, red_rubber)?)
        .add_sphere(Sphere::new(Vec3A::new(-7.0, 6.0, 18.0), 3.0, mirror)?)
        .add_sphere(Sphere::new(Vec3A::new(-8.0, 1.0, 14.0), 1.5, jade)?)
        .add_light(Light::new(Vec3A::new(-20.0, 20.0, 20.0), 1.5))
        .add_light(Light::new(Vec3A::new(-30.0, 50.0, -25.0), 1.8))
        .add_light(Light::new(Vec3A::new(-30.0, 20.0, 30.0), 1.7));
    Ok(scene)
}

fn run(args: &Args) -> Result<()> {
    let scene = create_scene()?;
    debug!("Scene: {} spheres, {} lights", scene.spheres.len(), scene.lights.len());

    let ctx = scene.context(args.render_settings())?;
    info!(
        "Image resolution: {}x{}, fov: {}°, max depth: {}",
        args.width, args.height, args.fov, args.max_depth
    );

    let camera = Camera::new(&ctx);
    let frame = if args.sequential {
        camera.render_sequential(&ctx)
    } else {
        camera.render(&ctx)
    };

    save_frame(&frame, &args.output)
}

fn main() {
    let args = Args::parse();

    init_logger(args.debug_level.map(Into::into));

    // Log application startup with version information
    info!("Glint - Git Version {} ({})", env!("GIT_HASH"), env!("GIT_DATE"));

    if let Err(e) = run(&args) {
        error!("Render failed: {}", e);
        std::process::exit(1);
    }
}
