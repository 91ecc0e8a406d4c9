/// A parametric range along a ray.
///
/// Intersection code tests candidates with [`Interval::surrounds`], so the
/// endpoints themselves are never accepted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f32,
    pub max: f32,
}

impl Interval {
    /// Create a new interval given min and max values.
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Interval from `min` to positive infinity.
    pub fn above(min: f32) -> Self {
        Self::new(min, f32::INFINITY)
    }

    /// Returns true if x is within the interval [min, max] (inclusive).
    pub fn contains(&self, x: f32) -> bool {
        self.min <= x && x <= self.max
    }

    /// Returns true if x is strictly within the interval (min, max) (exclusive).
    pub fn surrounds(&self, x: f32) -> bool {
        self.min < x && x < self.max
    }

    /// Same interval with the upper bound pulled in to `max`.
    pub fn with_max(&self, max: f32) -> Interval {
        Interval::new(self.min, max)
    }

    /// Clamps x to be within the interval [min, max].
    pub fn clamp(&self, x: f32) -> f32 {
        x.clamp(self.min, self.max)
    }

    /// A universe interval (contains everything).
    pub const UNIVERSE: Interval = Interval {
        min: f32::NEG_INFINITY,
        max: f32::INFINITY,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_contains() {
        let interval = Interval::new(0.0, 10.0);

        // Inclusive bounds
        assert!(interval.contains(0.0));
        assert!(interval.contains(10.0));
        assert!(interval.contains(5.0));

        // Outside bounds
        assert!(!interval.contains(-0.1));
        assert!(!interval.contains(10.1));
    }

    #[test]
    fn test_interval_surrounds() {
        let interval = Interval::new(0.001, 1.0);

        // Exclusive bounds - endpoints NOT included
        assert!(!interval.surrounds(0.001));
        assert!(!interval.surrounds(1.0));

        assert!(interval.surrounds(0.5));
        assert!(!interval.surrounds(0.0));
        assert!(!interval.surrounds(1.5));
    }

    #[test]
    fn test_interval_above() {
        let interval = Interval::above(1.0);
        assert!(interval.surrounds(1e30));
        assert!(!interval.surrounds(f32::INFINITY));
        assert!(!interval.surrounds(1.0));
    }

    #[test]
    fn test_interval_with_max() {
        let shrunk = Interval::above(0.001).with_max(4.0);
        assert_eq!(shrunk, Interval::new(0.001, 4.0));
    }

    #[test]
    fn test_interval_clamp() {
        let interval = Interval::new(0.0, 255.0);

        assert_eq!(interval.clamp(-5.0), 0.0);
        assert_eq!(interval.clamp(128.0), 128.0);
        assert_eq!(interval.clamp(300.0), 255.0);
    }

    #[test]
    fn test_interval_universe() {
        assert!(Interval::UNIVERSE.surrounds(0.0));
        assert!(Interval::UNIVERSE.contains(-1e10));
    }

    #[test]
    fn test_nan_is_never_inside() {
        assert!(!Interval::UNIVERSE.surrounds(f32::NAN));
        assert!(!Interval::UNIVERSE.contains(f32::NAN));
    }
}
