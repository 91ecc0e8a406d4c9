//! Scene container for Lumen.
//!
//! A scene is built once up front and only read while rendering, so every
//! type here is plain data that is `Send + Sync`.

use lumen_math::{Camera, Vec3};
use thiserror::Error;

use crate::color::Rgb;
use crate::geometry::{Primitive, Shape, Sphere, Surface, Triangle};
use crate::light::Light;

/// Errors reported by [`Scene::validate`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    #[error("primitive {index}: sphere radius must be positive, got {radius}")]
    InvalidRadius { index: usize, radius: f32 },

    #[error("primitive {index}: reflectivity must be within [0, 1], got {reflective}")]
    InvalidReflectivity { index: usize, reflective: f32 },

    #[error("primitive {index}: specular exponent must be a non-negative number, got {exponent}")]
    InvalidSpecular { index: usize, exponent: f32 },

    #[error("light {index}: intensity must be a non-negative number, got {intensity}")]
    InvalidIntensity { index: usize, intensity: f32 },

    #[error("viewport dimensions must be positive, got {width}x{height} at distance {distance}")]
    InvalidViewport {
        width: f32,
        height: f32,
        distance: f32,
    },
}

pub type SceneResult<T> = Result<T, SceneError>;

/// The rectangle rays are projected through, `distance` in front of the camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub distance: f32,
}

impl Viewport {
    /// Create a new viewport.
    pub fn new(width: f32, height: f32, distance: f32) -> Self {
        Self {
            width,
            height,
            distance,
        }
    }

    fn is_valid(&self) -> bool {
        [self.width, self.height, self.distance]
            .iter()
            .all(|v| *v > 0.0 && v.is_finite())
    }
}

impl Default for Viewport {
    /// A 1x1 viewport one unit in front of the camera (90 degree field of view).
    fn default() -> Self {
        Self::new(1.0, 1.0, 1.0)
    }
}

/// A complete scene: primitives, lights and the view into them.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    /// Scene name (for logging)
    pub name: String,

    /// Spheres and triangles, in insertion order
    pub primitives: Vec<Primitive>,

    /// Lights, in insertion order
    pub lights: Vec<Light>,

    /// Projection plane
    pub viewport: Viewport,

    /// Camera pose (world origin by default)
    pub camera: Camera,

    /// Color returned by rays that hit nothing
    pub background: Rgb,
}

impl Scene {
    /// Create an empty scene with a black background.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the viewport.
    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    /// Set the background color.
    pub fn with_background(mut self, background: Rgb) -> Self {
        self.background = background;
        self
    }

    /// Set the camera pose.
    pub fn with_camera(mut self, camera: Camera) -> Self {
        self.camera = camera;
        self
    }

    /// Add a sphere and return its primitive index.
    pub fn add_sphere(&mut self, center: Vec3, radius: f32, surface: Surface) -> usize {
        self.add_primitive(Primitive::new(
            Shape::Sphere(Sphere::new(center, radius)),
            surface,
        ))
    }

    /// Add a triangle and return its primitive index.
    pub fn add_triangle(&mut self, a: Vec3, b: Vec3, c: Vec3, surface: Surface) -> usize {
        self.add_primitive(Primitive::new(
            Shape::Triangle(Triangle::new(a, b, c)),
            surface,
        ))
    }

    /// Add any primitive and return its index.
    pub fn add_primitive(&mut self, primitive: Primitive) -> usize {
        let index = self.primitives.len();
        self.primitives.push(primitive);
        index
    }

    /// Add a light.
    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    /// Iterate over the spheres in the scene.
    pub fn spheres(&self) -> impl Iterator<Item = (&Sphere, &Surface)> {
        self.primitives.iter().filter_map(|p| match &p.shape {
            Shape::Sphere(sphere) => Some((sphere, &p.surface)),
            Shape::Triangle(_) => None,
        })
    }

    /// Iterate over the triangles in the scene.
    pub fn triangles(&self) -> impl Iterator<Item = (&Triangle, &Surface)> {
        self.primitives.iter().filter_map(|p| match &p.shape {
            Shape::Triangle(triangle) => Some((triangle, &p.surface)),
            Shape::Sphere(_) => None,
        })
    }

    /// Get primitive count.
    pub fn primitive_count(&self) -> usize {
        self.primitives.len()
    }

    /// Get light count.
    pub fn light_count(&self) -> usize {
        self.lights.len()
    }

    /// Check every parameter the renderer relies on.
    ///
    /// Degenerate triangles are allowed; they are simply never hit.
    pub fn validate(&self) -> SceneResult<()> {
        if !self.viewport.is_valid() {
            return Err(SceneError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
                distance: self.viewport.distance,
            });
        }

        for (index, primitive) in self.primitives.iter().enumerate() {
            primitive.validate(index)?;
        }

        for (index, light) in self.lights.iter().enumerate() {
            let intensity = light.intensity();
            if !(intensity >= 0.0 && intensity.is_finite()) {
                return Err(SceneError::InvalidIntensity { index, intensity });
            }
        }

        let degenerate = self.triangles().filter(|(t, _)| t.is_degenerate()).count();
        if degenerate > 0 {
            log::debug!(
                "Scene '{}' has {} degenerate triangle(s); they will never be hit",
                self.name,
                degenerate
            );
        }

        Ok(())
    }
}
