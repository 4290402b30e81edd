use std::fmt;

use crate::field::field::{FieldElement, FieldKind};

impl FieldElement for f32 {
    const KIND: FieldKind = FieldKind::Float32;

    #[inline(always)]
    fn field_add(self, rhs: f32) -> f32 {
        self + rhs
    }

    #[inline(always)]
    fn field_sub(self, rhs: f32) -> f32 {
        self - rhs
    }

    #[inline(always)]
    fn field_mul(self, rhs: f32) -> f32 {
        self * rhs
    }

    #[inline(always)]
    fn field_div(self, rhs: f32) -> Option<f32> {
        if rhs == 0.0 {
            return None;
        }
        Some(self / rhs)
    }

    fn abs_gt(&self, other: &f32) -> bool {
        self.abs() > other.abs()
    }

    // NaN pivots are never usable
    fn is_singular_pivot(&self, epsilon: f64) -> bool {
        self.is_nan() || (self.abs() as f64) < epsilon
    }

    fn parse(text: &str) -> Option<f32> {
        text.parse().ok()
    }

    fn format(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self)
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use crate::field::field::{FieldDisplay, FieldElement};

    #[test]
    fn test_float_arithmetic() {
        assert_eq!(1.5f32.field_add(2.25), 3.75);
        assert_eq!(1.5f32.field_sub(2.25), -0.75);
        assert_eq!(1.5f32.field_mul(-2.0), -3.0);
        assert_eq!(3.0f32.field_div(2.0), Some(1.5));
        assert_eq!(3.0f32.field_div(0.0), None);
        assert_eq!(3.0f32.field_div(-0.0), None);
    }

    #[test]
    fn test_float_pivot() {
        assert!((-2.5f32).abs_gt(&2.0));
        assert!(!(-2.0f32).abs_gt(&2.0));
        assert!(0.0f32.is_singular_pivot(1e-10));
        assert!(1e-12f32.is_singular_pivot(1e-10));
        assert!(!1e-3f32.is_singular_pivot(1e-10));
        assert!(!1e-3f32.is_singular_pivot(0.0));
        assert!(f32::NAN.is_singular_pivot(1e-10));
        assert!(f32::NAN.is_singular_pivot(0.0));
        assert!(!f32::INFINITY.is_singular_pivot(1e-10));
    }

    #[test]
    fn test_float_text() {
        assert_eq!(f32::parse("3.5"), Some(3.5));
        assert_eq!(f32::parse("-2"), Some(-2.0));
        assert_eq!(f32::parse("abc"), None);
        assert_eq!(FieldDisplay(1.23456f32).to_string(), "1.23");
        assert_eq!(FieldDisplay(-1.0f32).to_string(), "-1.00");
    }
}
