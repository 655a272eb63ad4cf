//! Glint sphere ray tracer
//!
//! Whitted-style recursive ray tracing over a flat list of spheres and point
//! lights: Lambert diffuse, Phong specular, hard shadows and mirror bounces up
//! to a fixed depth. Frames are assembled in parallel with rayon and packed to
//! 8-bit RGB for JPEG/PNG output, or written as linear EXR.

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod camera;
pub mod error;
pub mod hittable;
pub mod light;
pub mod material;
pub mod output;
pub mod ray;
pub mod scene;
pub mod shading;
pub mod sphere;

pub use camera::{Camera, FrameBuffer};
pub use error::{RenderError, Result};
pub use light::Light;
pub use material::{Color, Material};
pub use output::{pack_pixels, save_frame, tone_map, PixelBuffer};
pub use scene::{RenderContext, RenderSettings, Scene, MAX_DEPTH};
pub use shading::{cast_ray, BACKGROUND};
pub use sphere::Sphere;

/// Render `scene` with `settings` and return the packed 8-bit pixels.
///
/// Convenience wrapper over [`Camera::render`] followed by [`pack_pixels`].
pub fn render_to_pixels(scene: &Scene, settings: RenderSettings) -> Result<PixelBuffer> {
    let ctx = scene.context(settings)?;
    let frame = Camera::new(&ctx).render(&ctx);
    Ok(pack_pixels(&frame))
}
