//! Lumen Renderer - CPU Whitted ray tracing
//!
//! Renders a [`lumen_core::Scene`] into an 8-bit RGBA buffer:
//! primary rays through the viewport, nearest-hit search over every
//! primitive, Phong shading with hard shadows, and recursive mirror
//! reflections up to a fixed depth.

mod bucket;
mod hit;
mod lighting;
mod renderer;
mod tracer;

pub use bucket::{generate_buckets, render_bucket, Bucket, BucketResult, DEFAULT_BUCKET_SIZE};
pub use hit::{
    any_hit, barycentric, closest_hit, intersect_sphere, intersect_triangle, Hit, TriangleHit,
};
pub use lighting::{compute_lighting, SHADOW_EPSILON};
pub use renderer::{
    canvas_to_pixel, canvas_to_viewport, color_to_rgba, pixel_to_canvas, render, render_pixel,
    render_with_viewport, ImageBuffer, RenderConfig, RenderError, RenderResult,
};
pub use tracer::{blend, trace_ray, Color, REFLECTION_EPSILON};

/// Re-export Vec3 and common math types from lumen_math
pub use lumen_math::{Interval, Ray, Vec3};
