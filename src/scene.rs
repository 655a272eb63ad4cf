//! Scene ownership and the per-render context.
//!
//! The caller owns a [`Scene`]. A render only ever borrows it through a
//! [`RenderContext`], which also carries the validated [`RenderSettings`].
//! Nothing in here is mutated once rendering starts.

use std::f32::consts::PI;

use log::debug;

use crate::error::{RenderError, Result};
use crate::light::Light;
use crate::sphere::Sphere;

/// Recursion limit for mirror reflections.
pub const MAX_DEPTH: u32 = 4;

/// Default far plane, used both as the maximum trace distance and as the
/// "nothing hit" sentinel.
pub const DEFAULT_FAR_PLANE: f32 = 1000.0;

/// Spheres and lights, in the order they are scanned.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    /// Geometry, scanned front to back in this order.
    pub spheres: Vec<Sphere>,
    /// Point lights, summed in this order.
    pub lights: Vec<Light>,
}

impl Scene {
    /// Empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a sphere. Scan order (and therefore tie-breaking) follows insertion order.
    pub fn add_sphere(&mut self, sphere: Sphere) -> &mut Self {
        self.spheres.push(sphere);
        self
    }

    /// Add a point light.
    pub fn add_light(&mut self, light: Light) -> &mut Self {
        self.lights.push(light);
        self
    }

    /// Borrow this scene for one render.
    pub fn context(&self, settings: RenderSettings) -> Result<RenderContext<'_>> {
        RenderContext::new(&self.spheres, &self.lights, settings)
    }
}

/// Image and camera parameters for a render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderSettings {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Field of view in radians, strictly between 0 and pi.
    pub fov: f32,
    /// Maximum trace distance.
    pub far_plane: f32,
    /// Recursion cap for reflections.
    pub max_depth: u32,
}

impl RenderSettings {
    /// Settings with the default far plane and recursion cap.
    pub fn new(width: u32, height: u32, fov: f32) -> Self {
        Self {
            width,
            height,
            fov,
            far_plane: DEFAULT_FAR_PLANE,
            max_depth: MAX_DEPTH,
        }
    }

    /// Override the far-plane distance.
    pub fn with_far_plane(mut self, far_plane: f32) -> Self {
        self.far_plane = far_plane;
        self
    }

    /// Override the recursion depth cap.
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Width over height.
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    /// Reject settings that would make the frame assembler divide by zero or
    /// produce a degenerate projection.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(RenderError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if !(self.fov > 0.0 && self.fov < PI) {
            return Err(RenderError::InvalidFieldOfView(self.fov));
        }
        if !(self.far_plane > 0.0 && self.far_plane.is_finite()) {
            return Err(RenderError::InvalidFarPlane(self.far_plane));
        }
        if self.max_depth == 0 {
            return Err(RenderError::InvalidMaxDepth);
        }
        Ok(())
    }
}

/// Everything one render reads: borrowed scene data plus validated settings.
///
/// Cheap to copy and `Sync`, so worker threads share it freely.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    /// Borrowed scene geometry.
    pub spheres: &'a [Sphere],
    /// Borrowed scene lights.
    pub lights: &'a [Light],
    settings: RenderSettings,
}

impl<'a> RenderContext<'a> {
    /// Validate `settings` and bind them to the scene data.
    pub fn new(spheres: &'a [Sphere], lights: &'a [Light], settings: RenderSettings) -> Result<Self> {
        settings.validate()?;
        debug!(
            "Render context: {} spheres, {} lights, {}x{}, fov {:.3} rad, far plane {}, max depth {}",
            spheres.len(),
            lights.len(),
            settings.width,
            settings.height,
            settings.fov,
            settings.far_plane,
            settings.max_depth
        );
        Ok(Self {
            spheres,
            lights,
            settings,
        })
    }

    /// Validated settings for this render.
    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    /// Upper bound on hit distances.
    pub fn far_plane(&self) -> f32 {
        self.settings.far_plane
    }

    /// Recursion depth at which the background is returned.
    pub fn max_depth(&self) -> u32 {
        self.settings.max_depth
    }
}
