//! Ray-primitive intersection.
//!
//! There is no acceleration structure: every query scans all primitives in
//! scene order. Candidate distances are accepted only strictly inside the
//! query interval, and a later primitive replaces the current best only if it
//! is strictly closer.

use lumen_core::{Primitive, Scene, Shape, Sphere, Surface, Triangle};
use lumen_math::{safe_normalize, Interval, Ray, Vec3};

/// Nearest intersection along a ray.
#[derive(Debug, Clone, Copy)]
pub struct Hit<'a> {
    /// Ray parameter of the intersection
    pub t: f32,
    /// World-space intersection point
    pub point: Vec3,
    /// Outward surface normal (sphere) or face normal (triangle), unit length
    pub normal: Vec3,
    /// Shading parameters of the primitive that was hit
    pub surface: &'a Surface,
}

/// Result of a successful ray-triangle test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangleHit {
    pub t: f32,
    /// Unit face normal
    pub normal: Vec3,
    /// (alpha, beta, gamma) weights of vertices a, b and c
    pub barycentric: Vec3,
}

/// Both roots of the ray-sphere quadratic.
///
/// Returns `(INFINITY, INFINITY)` when there are no real roots or the ray
/// direction has zero length, so range filtering rejects them naturally.
pub fn intersect_sphere(ray: &Ray, sphere: &Sphere) -> (f32, f32) {
    let co = ray.origin - sphere.center;

    let a = ray.direction.dot(ray.direction);
    if a == 0.0 {
        return (f32::INFINITY, f32::INFINITY);
    }
    let b = 2.0 * co.dot(ray.direction);
    let c = co.dot(co) - sphere.radius * sphere.radius;

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return (f32::INFINITY, f32::INFINITY);
    }

    let sqrtd = discriminant.sqrt();
    let t1 = (-b + sqrtd) / (2.0 * a);
    let t2 = (-b - sqrtd) / (2.0 * a);
    (t1, t2)
}

/// Ray-plane test followed by a barycentric inside check.
///
/// Degenerate triangles, rays parallel to the plane and planes behind the
/// origin (`t < 0`) are all misses.
pub fn intersect_triangle(ray: &Ray, triangle: &Triangle) -> Option<TriangleHit> {
    let normal = safe_normalize(triangle.face_normal())?;

    let denom = normal.dot(ray.direction);
    if denom == 0.0 {
        return None;
    }

    let t = normal.dot(triangle.a - ray.origin) / denom;
    if !t.is_finite() || t < 0.0 {
        return None;
    }

    let barycentric = barycentric(triangle, ray.at(t))?;
    if !barycentric.to_array().iter().all(|w| (0.0..=1.0).contains(w)) {
        return None;
    }

    Some(TriangleHit {
        t,
        normal,
        barycentric,
    })
}

/// Barycentric coordinates of `point` (assumed to lie in the triangle's plane).
///
/// Returns `(alpha, beta, gamma)` with `alpha + beta + gamma == 1`, or `None`
/// when the edge vectors are linearly dependent.
pub fn barycentric(triangle: &Triangle, point: Vec3) -> Option<Vec3> {
    let v0 = triangle.b - triangle.a;
    let v1 = triangle.c - triangle.a;
    let v2 = point - triangle.a;

    let d00 = v0.dot(v0);
    let d01 = v0.dot(v1);
    let d11 = v1.dot(v1);
    let d20 = v2.dot(v0);
    let d21 = v2.dot(v1);

    let denom = d00 * d11 - d01 * d01;
    if denom == 0.0 {
        return None;
    }

    let beta = (d11 * d20 - d01 * d21) / denom;
    let gamma = (d00 * d21 - d01 * d20) / denom;
    let alpha = 1.0 - beta - gamma;
    Some(Vec3::new(alpha, beta, gamma))
}

/// Nearest accepted distance on one shape and the surface normal there.
///
/// Sphere normals are taken at the exact hit point; triangles are flat shaded
/// with their face normal.
#[inline]
fn nearest_on(shape: &Shape, ray: &Ray, ray_t: Interval) -> Option<(f32, Vec3)> {
    match shape {
        Shape::Sphere(sphere) => {
            let (t1, t2) = intersect_sphere(ray, sphere);
            [t1, t2]
                .into_iter()
                .filter(|t| ray_t.surrounds(*t))
                .min_by(f32::total_cmp)
                .map(|t| (t, sphere.normal_at(ray.at(t))))
        }
        Shape::Triangle(triangle) => intersect_triangle(ray, triangle)
            .filter(|hit| ray_t.surrounds(hit.t))
            .map(|hit| (hit.t, hit.normal)),
    }
}

/// Find the closest primitive hit by `ray` strictly inside `ray_t`.
pub fn closest_hit<'a>(scene: &'a Scene, ray: &Ray, ray_t: Interval) -> Option<Hit<'a>> {
    let mut closest: Option<(&Primitive, f32, Vec3)> = None;
    let mut closest_so_far = ray_t.max;

    for primitive in &scene.primitives {
        let shrunk = ray_t.with_max(closest_so_far);
        if let Some((t, normal)) = nearest_on(&primitive.shape, ray, shrunk) {
            closest_so_far = t;
            closest = Some((primitive, t, normal));
        }
    }

    let (primitive, t, normal) = closest?;
    Some(Hit {
        t,
        point: ray.at(t),
        normal,
        surface: &primitive.surface,
    })
}

/// True if anything at all is hit strictly inside `ray_t`.
///
/// Stops at the first accepted intersection; used for shadow rays.
pub fn any_hit(scene: &Scene, ray: &Ray, ray_t: Interval) -> bool {
    scene
        .primitives
        .iter()
        .any(|primitive| nearest_on(&primitive.shape, ray, ray_t).is_some())
}
