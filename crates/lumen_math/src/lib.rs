// Re-export glam for convenience
pub use glam::*;

// Lumen math types
mod camera;
mod interval;
mod ray;
mod vector;

pub use camera::Camera;
pub use interval::Interval;
pub use ray::Ray;
pub use vector::{reflect, safe_normalize};
