//! Lumen Core - Scene model for the Lumen ray tracer.
//!
//! This crate provides:
//!
//! - **Surface and geometry types**: `Surface`, `Sphere`, `Triangle`, `Shape`, `Primitive`
//! - **Lights**: ambient, point and directional `Light`s
//! - **Scene container**: `Scene` with its `Viewport`, camera and background
//! - **Sample scenes**: ready-made scenes in [`samples`]
//!
//! # Example
//!
//! ```
//! use lumen_core::{Light, Rgb, Scene, Surface};
//! use lumen_math::Vec3;
//!
//! let mut scene = Scene::new("single sphere");
//! scene.add_sphere(Vec3::new(0.0, -1.0, 3.0), 1.0, Surface::new(Rgb::new(255, 0, 0)));
//! scene.add_light(Light::ambient(1.0));
//! assert!(scene.validate().is_ok());
//! ```

pub mod color;
pub mod geometry;
pub mod light;
pub mod samples;
pub mod scene;

// Re-export commonly used types
pub use color::Rgb;
pub use geometry::{Primitive, Shape, Sphere, Surface, Triangle};
pub use light::Light;
pub use scene::{Scene, SceneError, SceneResult, Viewport};
