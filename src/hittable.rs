//! Ray-object intersection and the nearest-hit scene query.
//!
//! Defines the Hittable trait for geometric primitives and HitRecord for the
//! data the shader needs at an intersection. The scene is searched with a
//! plain linear scan; there is no acceleration structure.

use glam::Vec3A;

use crate::ray::Ray;

/// Trait for objects that can be intersected by rays.
///
/// Must be thread-safe (Sync + Send) because pixels are shaded in parallel
/// against the same borrowed scene.
pub trait Hittable: Sync + Send {
    /// Distance to the nearest intersection in front of the ray origin, if any.
    fn intersect(&self, ray: &Ray) -> Option<f32>;

    /// Outward unit normal at a point on the surface.
    fn normal_at(&self, point: Vec3A) -> Vec3A;
}

/// Ray-object intersection information.
#[derive(Debug, Clone, Copy)]
pub struct HitRecord<'a, H> {
    /// The object that was hit.
    pub object: &'a H,
    /// Distance along the ray to the intersection point.
    pub t: f32,
    /// Point where the ray intersects the object.
    pub p: Vec3A,
    /// Outward surface normal at the intersection point (unit vector).
    pub normal: Vec3A,
}

/// Find the closest object along `ray` whose hit distance is below `far_plane`.
///
/// Comparison against the running best is strict, so when two objects report
/// the same distance the one earlier in `objects` is kept.
pub fn nearest_hit<'a, H: Hittable>(
    objects: &'a [H],
    ray: &Ray,
    far_plane: f32,
) -> Option<HitRecord<'a, H>> {
    let mut closest: Option<(&'a H, f32)> = None;
    let mut closest_so_far = far_plane;

    for object in objects {
        if let Some(t) = object.intersect(ray) {
            if t < closest_so_far {
                closest_so_far = t;
                closest = Some((object, t));
            }
        }
    }

    closest.map(|(object, t)| {
        let p = ray.at(t);
        HitRecord {
            object,
            t,
            p,
            normal: object.normal_at(p),
        }
    })
}

/// Whether anything in `objects` intersects `ray` closer than `max_distance`.
///
/// Distances are measured as the length from the ray origin to the hit point,
/// so non-normalized directions are handled too.
pub fn any_hit_within<H: Hittable>(objects: &[H], ray: &Ray, max_distance: f32) -> bool {
    objects.iter().any(|object| {
        object
            .intersect(ray)
            .is_some_and(|t| (ray.at(t) - ray.origin).length() < max_distance)
    })
}
