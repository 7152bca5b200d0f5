//! 2D vector helpers
//!
//! `Vector2` is glam's `DVec2`: a `Copy` value type whose operators return new
//! values. The extension trait adds the rescale operations the steering rules
//! need, each guarded against zero-length input.

use glam::DVec2;

/// A 2D double-precision vector (position, velocity, acceleration, steering)
pub type Vector2 = DVec2;

/// Rescaling helpers on top of glam's arithmetic
pub trait VectorExt: Sized {
    /// Apply `f` to each component
    fn map_each(self, f: impl Fn(f64) -> f64) -> Self;

    /// Rescale to magnitude `len`.
    ///
    /// A zero-length vector has no direction and is returned unchanged.
    fn with_length(self, len: f64) -> Self;

    /// Rescale to magnitude `max` only when currently longer than `max`
    fn limited(self, max: f64) -> Self;
}

impl VectorExt for Vector2 {
    #[inline]
    fn map_each(self, f: impl Fn(f64) -> f64) -> Self {
        Vector2::new(f(self.x), f(self.y))
    }

    #[inline]
    fn with_length(self, len: f64) -> Self {
        let current = self.length();
        if current > 0.0 {
            self.map_each(|c| c / current * len)
        } else {
            self
        }
    }

    #[inline]
    fn limited(self, max: f64) -> Self {
        if self.length() > max {
            self.with_length(max)
        } else {
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_semantics() {
        let a = Vector2::new(1.0, 2.0);
        let b = Vector2::new(3.0, 4.0);

        assert_eq!(a + b, Vector2::new(4.0, 6.0));
        assert_eq!(b - a, Vector2::new(2.0, 2.0));
        assert_eq!(a * 2.0, Vector2::new(2.0, 4.0));
        assert_eq!(b.length(), 5.0);
        // Operands untouched
        assert_eq!(a, Vector2::new(1.0, 2.0));
    }

    #[test]
    fn test_map_each() {
        let v = Vector2::new(-2.0, 9.0).map_each(|c| c * 0.5);
        assert_eq!(v, Vector2::new(-1.0, 4.5));
    }

    #[test]
    fn test_with_length() {
        let v = Vector2::new(3.0, 4.0).with_length(10.0);
        assert!((v.length() - 10.0).abs() < 1e-12);
        assert!((v.x - 6.0).abs() < 1e-12);
        assert!((v.y - 8.0).abs() < 1e-12);
    }

    #[test]
    fn test_with_length_zero_vector_stays_zero() {
        let v = Vector2::ZERO.with_length(5.0);
        assert_eq!(v, Vector2::ZERO);
        assert!(!v.x.is_nan() && !v.y.is_nan());
    }

    #[test]
    fn test_limited() {
        let short = Vector2::new(0.3, 0.4);
        assert_eq!(short.limited(1.0), short);

        let long = Vector2::new(30.0, 40.0).limited(5.0);
        assert!((long.length() - 5.0).abs() < 1e-12);
    }
}
