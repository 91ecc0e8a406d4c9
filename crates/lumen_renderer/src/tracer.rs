//! Recursive ray tracing.

use lumen_core::Scene;
use lumen_math::{reflect, Interval, Ray, Vec3};

use crate::hit::{closest_hit, Hit};
use crate::lighting::compute_lighting;

/// Floating point color on the 0-255 scale.
///
/// Channels may exceed 255 before the final write clamps them.
pub type Color = Vec3;

/// Lower bound for reflected rays, keeps them from re-hitting their origin.
pub const REFLECTION_EPSILON: f32 = 0.001;

/// Compute the color seen along `ray`.
///
/// Rays that hit nothing inside `ray_t` return the scene background. Hits are
/// shaded locally and, for reflective surfaces with `depth > 0`, blended with
/// the color traced along the mirrored ray.
pub fn trace_ray(scene: &Scene, ray: &Ray, ray_t: Interval, depth: u32) -> Color {
    let Some(hit) = closest_hit(scene, ray, ray_t) else {
        return scene.background.to_vec3();
    };

    let local = local_color(scene, ray, &hit);

    if depth == 0 || !hit.surface.is_reflective() {
        return local;
    }

    let reflected_ray = Ray::new(hit.point, reflect(-ray.direction, hit.normal));
    let reflected = trace_ray(
        scene,
        &reflected_ray,
        Interval::above(REFLECTION_EPSILON),
        depth - 1,
    );

    blend(local, reflected, hit.surface.reflective)
}

/// Surface color scaled by the light arriving at the hit point.
fn local_color(scene: &Scene, ray: &Ray, hit: &Hit) -> Color {
    let intensity = compute_lighting(
        scene,
        hit.point,
        hit.normal,
        -ray.direction,
        hit.surface.specular,
    );
    hit.surface.color.to_vec3() * intensity
}

/// Mix local and reflected colors: `local * (1 - r) + reflected * r`.
#[inline]
pub fn blend(local: Color, reflected: Color, reflective: f32) -> Color {
    local * (1.0 - reflective) + reflected * reflective
}
