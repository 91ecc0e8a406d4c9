use glam::{Mat3, Vec3};

use crate::Ray;

/// Camera pose for ray generation.
///
/// The default camera sits at the world origin looking down +Z with +Y up,
/// which is the frame viewport directions are expressed in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    pub rotation: Mat3,
}

impl Camera {
    /// Create a camera at `position` with no rotation.
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            rotation: Mat3::IDENTITY,
        }
    }

    /// Rotate the camera around the world Y axis (angle in degrees).
    pub fn with_yaw(mut self, degrees: f32) -> Self {
        self.rotation = Mat3::from_rotation_y(degrees.to_radians());
        self
    }

    /// Ray from the camera through a point on the viewport.
    ///
    /// `viewport_point` is in camera space; the returned direction is not
    /// normalized, so `t = 1` lands on the viewport plane.
    pub fn ray_through(&self, viewport_point: Vec3) -> Ray {
        Ray::new(self.position, self.rotation * viewport_point)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::ZERO)
    }
}
