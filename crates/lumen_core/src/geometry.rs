//! Renderable primitives.
//!
//! Spheres and triangles share a [`Surface`] description and are stored as a
//! [`Shape`] inside a [`Primitive`], so the intersection code dispatches with a
//! plain `match`.

use lumen_math::{Interval, Vec3};

use crate::color::Rgb;

/// Shading parameters shared by every primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surface {
    /// Base color
    pub color: Rgb,

    /// Phong exponent, `None` disables the specular term
    pub specular: Option<f32>,

    /// Fraction of the final color taken from the mirror reflection (0-1)
    pub reflective: f32,
}

impl Surface {
    /// A matte, non-reflective surface.
    pub fn new(color: Rgb) -> Self {
        Self {
            color,
            specular: None,
            reflective: 0.0,
        }
    }

    /// Set the Phong exponent.
    ///
    /// Negative values (conventionally `-1`) disable specular highlights.
    pub fn with_specular(mut self, exponent: f32) -> Self {
        self.specular = if exponent < 0.0 { None } else { Some(exponent) };
        self
    }

    /// Set the reflectivity.
    pub fn with_reflective(mut self, reflective: f32) -> Self {
        self.reflective = reflective;
        self
    }

    /// True if tracing should follow a reflected ray off this surface.
    pub fn is_reflective(&self) -> bool {
        self.reflective > 0.0
    }
}

/// A sphere given by center and radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Outward unit normal at a point on the surface.
    pub fn normal_at(&self, point: Vec3) -> Vec3 {
        (point - self.center) / self.radius
    }
}

/// A triangle given by its three vertices.
///
/// Winding decides the face normal: `(b - a) x (c - a)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub a: Vec3,
    pub b: Vec3,
    pub c: Vec3,
}

impl Triangle {
    /// Create a new triangle.
    pub fn new(a: Vec3, b: Vec3, c: Vec3) -> Self {
        Self { a, b, c }
    }

    /// Unnormalized face normal (length is twice the area).
    pub fn face_normal(&self) -> Vec3 {
        (self.b - self.a).cross(self.c - self.a)
    }

    /// True if the vertices span no area.
    pub fn is_degenerate(&self) -> bool {
        self.face_normal().length_squared() == 0.0
    }
}

/// Geometry of a primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Sphere(Sphere),
    Triangle(Triangle),
}

/// A shape plus the surface it is shaded with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Primitive {
    pub shape: Shape,
    pub surface: Surface,
}

impl Primitive {
    /// Create a new primitive.
    pub fn new(shape: Shape, surface: Surface) -> Self {
        Self { shape, surface }
    }

    /// Check that the surface parameters are usable.
    pub(crate) fn validate(&self, index: usize) -> crate::SceneResult<()> {
        use crate::SceneError;

        if let Shape::Sphere(sphere) = &self.shape {
            if !(sphere.radius > 0.0 && sphere.radius.is_finite()) {
                return Err(SceneError::InvalidRadius {
                    index,
                    radius: sphere.radius,
                });
            }
        }

        if !Interval::new(0.0, 1.0).contains(self.surface.reflective) {
            return Err(SceneError::InvalidReflectivity {
                index,
                reflective: self.surface.reflective,
            });
        }

        if let Some(exponent) = self.surface.specular {
            if !(exponent >= 0.0 && exponent.is_finite()) {
                return Err(SceneError::InvalidSpecular { index, exponent });
            }
        }

        Ok(())
    }
}
