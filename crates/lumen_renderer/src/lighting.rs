//! Phong lighting with hard shadows.

use lumen_core::{Light, Scene};
use lumen_math::{reflect, Interval, Ray, Vec3};

use crate::hit::any_hit;

/// Lower bound for shadow rays, keeps a surface from shadowing itself.
pub const SHADOW_EPSILON: f32 = 0.001;

/// Total light intensity arriving at `point`.
///
/// Sums every ambient light, plus the diffuse and specular terms of each point
/// and directional light that is not blocked. `view` points from the surface
/// back towards the viewer. The result is not clamped.
pub fn compute_lighting(
    scene: &Scene,
    point: Vec3,
    normal: Vec3,
    view: Vec3,
    specular: Option<f32>,
) -> f32 {
    let mut intensity = 0.0;

    for light in &scene.lights {
        // L stays unnormalized: for point lights t = 1 is the light itself
        let (light_intensity, light_dir, shadow_t) = match *light {
            Light::Ambient { intensity: i } => {
                intensity += i;
                continue;
            }
            Light::Point {
                intensity: i,
                position,
            } => (i, position - point, Interval::new(SHADOW_EPSILON, 1.0)),
            Light::Directional {
                intensity: i,
                direction,
            } => (i, direction, Interval::above(SHADOW_EPSILON)),
        };

        if any_hit(scene, &Ray::new(point, light_dir), shadow_t) {
            continue;
        }

        // Diffuse
        let n_dot_l = normal.dot(light_dir);
        if n_dot_l > 0.0 {
            intensity += light_intensity * n_dot_l / (normal.length() * light_dir.length());
        }

        // Specular
        if let Some(exponent) = specular {
            let r = reflect(light_dir, normal);
            let r_dot_v = r.dot(view);
            if r_dot_v > 0.0 {
                intensity +=
                    light_intensity * (r_dot_v / (r.length() * view.length())).powf(exponent);
            }
        }
    }

    intensity
}
