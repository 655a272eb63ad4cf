//! Surface description for the local shading model.
//!
//! A single Phong-style material: a diffuse color, a specular highlight and a
//! metallic factor that turns the surface into a pure mirror.

use glam::Vec3A;

/// RGB color type using Vec3A for SIMD optimization.
pub type Color = Vec3A;

/// Material coefficients read by the shading engine.
///
/// All fields are expected to be non-negative. `metallic > 0` makes the shader
/// discard the diffuse and specular terms and return only the reflection,
/// scaled by `metallic`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Matte surface color, scaled by the summed Lambert term.
    pub diffuse: Color,
    /// Highlight color, scaled by the summed specular term.
    pub specular_color: Color,
    /// Phong exponent (highlight sharpness).
    pub specular_power: f32,
    /// Multiplier on the specular contribution.
    pub reflectivity: f32,
    /// Mirror factor. Any positive value overrides local shading.
    pub metallic: f32,
}

impl Material {
    /// Matte surface with no highlight and no mirror term.
    pub fn matte(diffuse: Color) -> Self {
        Self {
            diffuse,
            specular_color: Color::ZERO,
            specular_power: 1.0,
            reflectivity: 0.0,
            metallic: 0.0,
        }
    }

    /// Diffuse surface with a white Phong highlight.
    pub fn glossy(diffuse: Color, specular_power: f32, reflectivity: f32) -> Self {
        Self {
            diffuse,
            specular_color: Color::ONE,
            specular_power,
            reflectivity,
            metallic: 0.0,
        }
    }

    /// Mirror surface. The diffuse color is kept for completeness but never shows.
    pub fn mirror(metallic: f32) -> Self {
        Self {
            diffuse: Color::ONE,
            specular_color: Color::ONE,
            specular_power: 1.0,
            reflectivity: 0.0,
            metallic,
        }
    }

    /// Whether the reflection term replaces local shading for this surface.
    pub fn is_metallic(&self) -> bool {
        self.metallic > 0.0
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::matte(Color::splat(0.5))
    }
}
