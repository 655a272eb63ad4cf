//! Ray representation and the small amount of vector math the tracer needs.
//!
//! A ray is defined as r(t) = origin + t * direction. Directions are kept
//! unit-length by every caller in this crate, so `t` doubles as a distance.

use glam::Vec3A;

/// Offset applied to secondary ray origins to escape the surface they start on.
pub const SURFACE_EPSILON: f32 = 1e-3;

/// Ray in 3D space defined by origin and direction.
///
/// Mathematical representation: r(t) = origin + t * direction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Starting point of the ray in world coordinates.
    pub origin: Vec3A,

    /// Direction vector of the ray.
    ///
    /// Not required to be normalized by the intersection code, but primary,
    /// reflected and shadow rays are all built from unit vectors.
    pub direction: Vec3A,
}

impl Ray {
    /// Create a new ray with origin and direction.
    pub fn new(origin: Vec3A, direction: Vec3A) -> Self {
        Self { origin, direction }
    }

    /// Compute a point at parameter t along the ray.
    ///
    /// Returns r(t) = origin + t * direction.
    pub fn at(&self, t: f32) -> Vec3A {
        self.origin + t * self.direction
    }
}

/// Mirror `v` about the plane whose normal is `n`.
///
/// Same convention as GLSL `reflect`: `v - 2 * dot(n, v) * n`. A zero normal
/// leaves `v` untouched.
pub fn reflect(v: Vec3A, n: Vec3A) -> Vec3A {
    v - 2.0 * n.dot(v) * n
}

/// Push `point` off a surface by [`SURFACE_EPSILON`] along `normal`.
///
/// The side is picked from `direction`: a ray heading into the surface
/// (`dot(direction, normal) < 0`) starts just below it, anything else just above.
pub fn offset_along_normal(point: Vec3A, normal: Vec3A, direction: Vec3A) -> Vec3A {
    let side = if direction.dot(normal) < 0.0 { -1.0 } else { 1.0 };
    point + normal * SURFACE_EPSILON * side
}
