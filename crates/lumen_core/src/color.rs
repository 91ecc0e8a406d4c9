//! 8-bit RGB colors for scene description.

use lumen_math::{Interval, Vec3};

/// An 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    /// Create a new color.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels as floats on the 0-255 scale.
    pub fn to_vec3(self) -> Vec3 {
        Vec3::new(self.r as f32, self.g as f32, self.b as f32)
    }

    /// Convert floating point channels (0-255 scale) back to 8 bits.
    ///
    /// Each channel is clamped to [0, 255] and truncated.
    pub fn from_vec3(v: Vec3) -> Self {
        let channels = Interval::new(0.0, 255.0);
        let channel = |c: f32| channels.clamp(c) as u8;
        Self::new(channel(v.x), channel(v.y), channel(v.z))
    }
}
