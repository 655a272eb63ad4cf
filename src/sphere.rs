//! Sphere primitive for ray tracing.
//!
//! Implements ray-sphere intersection by solving the quadratic obtained from
//! substituting r(t) into |p - center|^2 = radius^2.

use glam::Vec3A;

use crate::error::{RenderError, Result};
use crate::hittable::Hittable;
use crate::material::Material;
use crate::ray::Ray;

/// Sphere primitive defined by center, radius, and material.
#[derive(Debug, Clone, PartialEq)]
pub struct Sphere {
    /// Center point of the sphere in world coordinates.
    pub center: Vec3A,

    /// Radius of the sphere (always positive and finite).
    radius: f32,

    /// Material properties read by the shader.
    pub material: Material,
}

impl Sphere {
    /// Create a new sphere.
    ///
    /// Rejects non-positive or non-finite radii instead of clamping them.
    pub fn new(center: Vec3A, radius: f32, material: Material) -> Result<Self> {
        if !(radius > 0.0 && radius.is_finite()) {
            return Err(RenderError::InvalidRadius(radius));
        }
        Ok(Self {
            center,
            radius,
            material,
        })
    }

    /// Radius of the sphere.
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Outward unit normal at a point on the surface.
    pub fn normal_at(&self, point: Vec3A) -> Vec3A {
        (point - self.center).normalize_or_zero()
    }

    /// Distance along `ray` to the nearest intersection in front of its origin.
    ///
    /// The near root wins when it is non-negative. From inside the sphere the
    /// near root is behind the origin, so the exit point is reported. A tangent
    /// ray (zero discriminant) counts as a hit at the touching point. Rays with
    /// a zero-length direction never hit.
    pub fn ray_intersect(&self, ray: &Ray) -> Option<f32> {
        // Vector from ray origin to sphere center
        let oc = self.center - ray.origin;

        let a = ray.direction.length_squared();
        if a == 0.0 {
            return None;
        }
        let h = ray.direction.dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = h * h - a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();
        let near = (h - sqrtd) / a;
        if near >= 0.0 {
            return Some(near);
        }
        let far = (h + sqrtd) / a;
        (far >= 0.0).then_some(far)
    }
}

impl Hittable for Sphere {
    fn intersect(&self, ray: &Ray) -> Option<f32> {
        self.ray_intersect(ray)
    }

    fn normal_at(&self, point: Vec3A) -> Vec3A {
        Sphere::normal_at(self, point)
    }
}
