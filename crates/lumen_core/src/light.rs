//! Light sources.

use lumen_math::Vec3;

/// A light contributing a scalar intensity to shading.
///
/// Any number of lights of each kind may be present; contributions are summed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Light {
    /// Uniform light reaching every point regardless of geometry.
    Ambient { intensity: f32 },

    /// Light emitted from a single position.
    Point { intensity: f32, position: Vec3 },

    /// Light arriving from infinitely far away.
    ///
    /// `direction` points from the surface towards the light.
    Directional { intensity: f32, direction: Vec3 },
}

impl Light {
    pub fn ambient(intensity: f32) -> Self {
        Light::Ambient { intensity }
    }

    pub fn point(intensity: f32, position: Vec3) -> Self {
        Light::Point {
            intensity,
            position,
        }
    }

    pub fn directional(intensity: f32, direction: Vec3) -> Self {
        Light::Directional {
            intensity,
            direction,
        }
    }

    /// Intensity of this light, whatever its kind.
    pub fn intensity(&self) -> f32 {
        match *self {
            Light::Ambient { intensity }
            | Light::Point { intensity, .. }
            | Light::Directional { intensity, .. } => intensity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intensity() {
        assert_eq!(Light::ambient(0.2).intensity(), 0.2);
        assert_eq!(Light::point(0.6, Vec3::new(2.0, 1.0, 0.0)).intensity(), 0.6);
        assert_eq!(Light::directional(0.2, Vec3::new(1.0, 4.0, 4.0)).intensity(), 0.2);
    }
}
