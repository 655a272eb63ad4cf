//! Point lights.

use glam::Vec3A;

/// Point light. Intensity is not attenuated with distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    /// World-space position.
    pub position: Vec3A,
    /// Non-negative brightness multiplier.
    pub intensity: f32,
}

impl Light {
    /// Light at `position` with the given intensity.
    pub fn new(position: Vec3A, intensity: f32) -> Self {
        Self { position, intensity }
    }
}
