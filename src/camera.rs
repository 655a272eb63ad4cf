//! Frame assembly: one primary ray per pixel, shaded into an HDR frame buffer.

use glam::Vec3A;
use image::{ImageBuffer, Rgb};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};
use rayon::prelude::*;

use crate::material::Color;
use crate::ray::Ray;
use crate::scene::RenderContext;
use crate::shading::cast_ray;

/// Linear RGB frame buffer, row-major, one sample per pixel.
pub type FrameBuffer = ImageBuffer<Rgb<f32>, Vec<f32>>;

/// Pinhole camera at the world origin looking down +Z.
///
/// Holds the per-render projection terms so ray generation is a handful of
/// multiplies per pixel.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    /// Rendered image width in pixel count
    pub image_width: u32,
    /// Rendered image height in pixel count
    pub image_height: u32,
    /// tan(fov / 2)
    half_fov_tan: f32,
    /// Width over height
    aspect_ratio: f32,
}

impl Camera {
    /// Camera matching the dimensions and field of view of `ctx`.
    pub fn new(ctx: &RenderContext<'_>) -> Self {
        let settings = ctx.settings();
        Self {
            image_width: settings.width,
            image_height: settings.height,
            half_fov_tan: (settings.fov / 2.0).tan(),
            aspect_ratio: settings.aspect_ratio(),
        }
    }

    /// Primary ray through pixel `(i, j)`.
    ///
    /// The pixel index is halved before normalizing, so the frame spans from
    /// the top-left edge of the field of view to its center.
    pub fn get_ray(&self, i: u32, j: u32) -> Ray {
        let x = (2.0 * (i as f32 * 0.5) / self.image_width as f32 - 1.0) * self.half_fov_tan * self.aspect_ratio;
        let y = -(2.0 * (j as f32 * 0.5) / self.image_height as f32 - 1.0) * self.half_fov_tan;
        Ray::new(Vec3A::ZERO, Vec3A::new(x, y, 1.0).normalize())
    }

    /// Shade a single pixel from scratch.
    pub fn shade_pixel(&self, ctx: &RenderContext<'_>, i: u32, j: u32) -> Color {
        cast_ray(ctx, &self.get_ray(i, j), 0, None)
    }

    /// Renders the scene on all rayon worker threads.
    ///
    /// Every pixel is independent and written exactly once, so the result
    /// does not depend on scheduling.
    pub fn render(&self, ctx: &RenderContext<'_>) -> FrameBuffer {
        let mut image = FrameBuffer::new(self.image_width, self.image_height);

        info!("Generating image using {} CPU cores...", rayon::current_num_threads());
        let generation_start = std::time::Instant::now();
        let pb = self.progress_bar();

        image.enumerate_pixels_mut().par_bridge().for_each(|(i, j, pixel)| {
            *pixel = to_rgb(self.shade_pixel(ctx, i, j));
            pb.inc(1);
        });

        pb.finish();
        info!("Image generated in {:.2?}", generation_start.elapsed());

        image
    }

    /// Same output as [`Camera::render`], on the calling thread in scanline order.
    pub fn render_sequential(&self, ctx: &RenderContext<'_>) -> FrameBuffer {
        let generation_start = std::time::Instant::now();
        let image = FrameBuffer::from_fn(self.image_width, self.image_height, |i, j| {
            to_rgb(self.shade_pixel(ctx, i, j))
        });
        info!("Image generated sequentially in {:.2?}", generation_start.elapsed());
        image
    }

    fn progress_bar(&self) -> ProgressBar {
        let pb = ProgressBar::new(u64::from(self.image_width) * u64::from(self.image_height));
        match ProgressStyle::default_bar().template(PROGRESS_TEMPLATE) {
            Ok(style) => pb.set_style(style),
            Err(e) => debug!("Progress bar template rejected, using default style: {e}"),
        }
        pb
    }
}

const PROGRESS_TEMPLATE: &str = "{bar:40} {pos}/{len} ETA: {eta}";

fn to_rgb(color: Color) -> Rgb<f32> {
    Rgb([color.x, color.y, color.z])
}
