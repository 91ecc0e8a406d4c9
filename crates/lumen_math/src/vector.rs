//! Vector helpers not provided by glam.

use crate::Vec3;

/// Mirror `v` about `n`: `2 * n * (n . v) - v`.
///
/// Neither vector needs to be normalized; with a unit `n` the result has the
/// same length as `v`.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    2.0 * n * n.dot(v) - v
}

/// Normalize `v`, or `None` for a zero-length (or non-finite) vector.
#[inline]
pub fn safe_normalize(v: Vec3) -> Option<Vec3> {
    let length = v.length();
    if length == 0.0 || !length.is_finite() {
        return None;
    }
    Some(v / length)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reflect_about_axis() {
        let v = Vec3::new(1.0, 1.0, 0.0);
        assert_eq!(reflect(v, Vec3::Y), Vec3::new(-1.0, 1.0, 0.0));
    }

    #[test]
    fn test_reflect_preserves_length() {
        let v = Vec3::new(0.3, -2.0, 1.5);
        let n = Vec3::new(1.0, 2.0, 2.0).normalize();
        assert!((reflect(v, n).length() - v.length()).abs() < 1e-5);
    }

    #[test]
    fn test_reflect_along_normal_is_identity() {
        let n = Vec3::Z;
        assert_eq!(reflect(Vec3::new(0.0, 0.0, 3.0), n), Vec3::new(0.0, 0.0, 3.0));
    }

    #[test]
    fn test_safe_normalize() {
        assert_eq!(safe_normalize(Vec3::new(0.0, 3.0, 0.0)), Some(Vec3::Y));
        assert_eq!(safe_normalize(Vec3::ZERO), None);
        assert_eq!(safe_normalize(Vec3::splat(f32::INFINITY)), None);
    }
}
