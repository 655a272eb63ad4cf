use std::f32::consts::FRAC_PI_3;

use glam::Vec3A;
use glint::{
    pack_pixels, render_to_pixels, tone_map, Camera, Light, Material, RenderSettings, Scene, Sphere, BACKGROUND,
};

const SIZE: u32 = 100;

fn red_sphere_scene(light: Vec3A) -> Scene {
    let mut scene = Scene::new();
    scene
        .add_sphere(Sphere::new(Vec3A::new(0.0, 0.0, 5.0), 1.0, Material::matte(Vec3A::new(1.0, 0.0, 0.0))).unwrap())
        .add_light(Light::new(light, 1.0));
    scene
}

fn background_pixel() -> [f32; 3] {
    BACKGROUND.to_array()
}

#[test]
fn single_sphere_frame() {
    let scene = red_sphere_scene(Vec3A::new(0.0, 5.0, -5.0));
    let ctx = scene.context(RenderSettings::new(SIZE, SIZE, FRAC_PI_3)).unwrap();
    let frame = Camera::new(&ctx).render(&ctx);

    // (99, 99) carries the ray closest to the optical axis.
    assert_ne!(frame.get_pixel(SIZE - 1, SIZE - 1).0, background_pixel());

    for (i, j) in [(0, 0), (SIZE / 2, SIZE / 2), (0, SIZE - 1), (SIZE - 1, 0), (10, 90)] {
        assert_eq!(frame.get_pixel(i, j).0, background_pixel(), "pixel ({i}, {j})");
    }
}

// The light sits in front of and above the sphere, but the Z-mirrored lighting
// direction and the Y-mirrored shadow ray leave every visible point dark.
#[test]
fn overhead_front_light_leaves_sphere_black() {
    let scene = red_sphere_scene(Vec3A::new(0.0, 5.0, -5.0));
    let ctx = scene.context(RenderSettings::new(SIZE, SIZE, FRAC_PI_3)).unwrap();
    let frame = Camera::new(&ctx).render_sequential(&ctx);

    let mut covered = 0;
    for pixel in frame.pixels() {
        if pixel.0 != background_pixel() {
            covered += 1;
            assert!(pixel.0[0] < 1e-3, "{:?}", pixel.0);
            assert_eq!(&pixel.0[1..], &[0.0, 0.0]);
        }
    }
    assert!(covered > 500, "sphere covers {covered} pixels");
}

#[test]
fn side_light_shows_red_sphere() {
    let scene = red_sphere_scene(Vec3A::new(-10.0, 0.0, 5.0));
    let ctx = scene.context(RenderSettings::new(SIZE, SIZE, FRAC_PI_3)).unwrap();
    let frame = Camera::new(&ctx).render(&ctx);

    let lit = frame.get_pixel(80, 80).0;
    assert!(lit[0] > 0.4 && lit[0] < 0.7, "{lit:?}");
    assert_eq!(&lit[1..], &[0.0, 0.0]);

    // Pure matte red: no pixel ever picks up green or blue unless it is background.
    for pixel in frame.pixels().filter(|p| p.0 != background_pixel()) {
        assert_eq!(&pixel.0[1..], &[0.0, 0.0]);
    }
}

#[test]
fn mirror_sphere_reflects_background() {
    let mut scene = Scene::new();
    scene
        .add_sphere(Sphere::new(Vec3A::new(0.0, 0.0, 5.0), 1.0, Material::mirror(1.0)).unwrap())
        .add_light(Light::new(Vec3A::new(-10.0, 0.0, 5.0), 1.0));
    let ctx = scene.context(RenderSettings::new(SIZE, SIZE, FRAC_PI_3)).unwrap();
    let frame = Camera::new(&ctx).render(&ctx);

    // Every reflection escapes to the background, so the mirror vanishes.
    assert!(frame.pixels().all(|p| p.0 == background_pixel()));
}

#[test]
fn packed_output_has_interleaved_layout() {
    let scene = red_sphere_scene(Vec3A::new(-10.0, 0.0, 5.0));
    let pixels = render_to_pixels(&scene, RenderSettings::new(40, 30, FRAC_PI_3)).unwrap();
    assert_eq!(pixels.dimensions(), (40, 30));

    let raw = pixels.into_raw();
    assert_eq!(raw.len(), 40 * 30 * 3);
    assert_eq!(&raw[..3], &tone_map(background_pixel()));
}

#[test]
fn packing_matches_frame_buffer() {
    let scene = red_sphere_scene(Vec3A::new(-10.0, 0.0, 5.0));
    let ctx = scene.context(RenderSettings::new(32, 32, FRAC_PI_3)).unwrap();
    let frame = Camera::new(&ctx).render(&ctx);
    let packed = pack_pixels(&frame);

    for (x, y, pixel) in frame.enumerate_pixels() {
        assert_eq!(packed.get_pixel(x, y).0, tone_map(pixel.0));
    }
}

#[test]
fn invalid_settings_fail_before_rendering() {
    let scene = red_sphere_scene(Vec3A::new(0.0, 5.0, -5.0));
    assert!(render_to_pixels(&scene, RenderSettings::new(0, 100, FRAC_PI_3)).is_err());
    assert!(render_to_pixels(&scene, RenderSettings::new(100, 100, 0.0)).is_err());
    assert!(render_to_pixels(&scene, RenderSettings::new(100, 100, FRAC_PI_3).with_far_plane(-1.0)).is_err());
}
