//! Recursive shading: nearest hit, mirror bounce, direct lighting, combine.
//!
//! [`cast_ray`] is the whole local model. Each call scans the scene once for
//! the primary hit, recurses once for the reflection while under the depth
//! cap, then casts one shadow ray per light.
//!
//! Two geometric quirks are reproduced on purpose because the rendered output
//! depends on them:
//! - the lighting direction is the to-light vector mirrored about +Z, and the
//!   shadow ray travels along that direction mirrored again about +Z and then
//!   +Y, which is the to-light vector with its Y component negated;
//! - the reflected ray starts from the incoming ray's origin (nudged along the
//!   normal), not from the hit point.

use glam::Vec3A;

use crate::hittable::{any_hit_within, nearest_hit};
use crate::light::Light;
use crate::material::{Color, Material};
use crate::ray::{offset_along_normal, reflect, Ray};
use crate::scene::RenderContext;
use crate::sphere::Sphere;

/// Returned for rays that select nothing, and for every ray at the depth cap.
pub const BACKGROUND: Color = Color::new(0.90, 0.89, 0.89);

/// Shade one ray.
///
/// `fallback` stands in for the selected sphere when the scene query finds
/// nothing; the hit point and normal are zero in that case. The reflection
/// bounce passes the same `fallback` down unchanged, so primary rays cast with
/// `None` never pick up a hint.
pub fn cast_ray(ctx: &RenderContext<'_>, ray: &Ray, depth: u32, fallback: Option<&Sphere>) -> Color {
    // At the cap nothing is combined, whatever the ray would have hit.
    if depth >= ctx.max_depth() {
        return BACKGROUND;
    }

    let (selected, hit_point, normal) = match nearest_hit(ctx.spheres, ray, ctx.far_plane()) {
        Some(hit) => (hit.object, hit.p, hit.normal),
        None => match fallback {
            Some(sphere) => (sphere, Vec3A::ZERO, Vec3A::ZERO),
            None => return BACKGROUND,
        },
    };
    let material = &selected.material;

    let reflect_dir = reflect(ray.direction, normal).normalize_or_zero();
    let reflect_origin = offset_along_normal(ray.origin, normal, reflect_dir);
    let reflection_color = cast_ray(ctx, &Ray::new(reflect_origin, reflect_dir), depth + 1, fallback);

    // Mirrors drop their local terms entirely; skipping the light loop is
    // equivalent since those terms would be discarded.
    if material.is_metallic() {
        return reflection_color * material.metallic;
    }

    let lighting = direct_lighting(ctx, ray, hit_point, normal, material);
    material.diffuse * lighting.diffuse
        + material.specular_color * lighting.specular
        + reflection_color * material.metallic
}

/// Summed light contributions at one surface point.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Lighting {
    /// Sum of Lambert terms times light intensity.
    pub diffuse: f32,
    /// Sum of Phong highlight terms times light intensity.
    pub specular: f32,
}

/// Lambert and Phong sums over every light that is not shadowed.
pub fn direct_lighting(
    ctx: &RenderContext<'_>,
    ray: &Ray,
    hit_point: Vec3A,
    normal: Vec3A,
    material: &Material,
) -> Lighting {
    let mut total = Lighting::default();

    for light in ctx.lights {
        let to_light = light.position - hit_point;
        let light_distance = to_light.length();
        // A light sitting on the surface point contributes nothing.
        if light_distance == 0.0 {
            continue;
        }

        let light_dir = lighting_direction(to_light / light_distance);
        let shadow_dir = shadow_direction(light_dir);
        let shadow_origin = offset_along_normal(hit_point, normal, shadow_dir);
        if any_hit_within(ctx.spheres, &Ray::new(shadow_origin, shadow_dir), light_distance) {
            continue;
        }

        total.diffuse += light.intensity * normal.dot(light_dir).max(0.0);
        total.specular += specular_term(light, light_dir, normal, ray.direction, material);
    }

    total
}

/// Direction used by the diffuse and specular terms: the unit to-light vector
/// mirrored about +Z.
pub fn lighting_direction(to_light: Vec3A) -> Vec3A {
    reflect(to_light, Vec3A::Z)
}

/// Direction of the occlusion test ray, derived from the lighting direction by
/// mirroring about +Z and then +Y.
pub fn shadow_direction(light_dir: Vec3A) -> Vec3A {
    reflect(reflect(light_dir, Vec3A::Z), Vec3A::Y)
}

fn specular_term(light: &Light, light_dir: Vec3A, normal: Vec3A, view_dir: Vec3A, material: &Material) -> f32 {
    let highlight = reflect(light_dir, normal).dot(-view_dir).max(0.0);
    light.intensity * highlight.powf(material.specular_power) * material.reflectivity
}
