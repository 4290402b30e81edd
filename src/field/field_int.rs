use std::fmt;

use crate::field::field::{FieldElement, FieldKind};

// Overflow wraps around instead of panicking, division truncates toward zero.
impl FieldElement for i64 {
    const KIND: FieldKind = FieldKind::Integer;

    #[inline(always)]
    fn field_add(self, rhs: i64) -> i64 {
        self.wrapping_add(rhs)
    }

    #[inline(always)]
    fn field_sub(self, rhs: i64) -> i64 {
        self.wrapping_sub(rhs)
    }

    #[inline(always)]
    fn field_mul(self, rhs: i64) -> i64 {
        self.wrapping_mul(rhs)
    }

    #[inline(always)]
    fn field_div(self, rhs: i64) -> Option<i64> {
        if rhs == 0 {
            return None;
        }
        Some(self.wrapping_div(rhs))
    }

    fn abs_gt(&self, other: &i64) -> bool {
        self.unsigned_abs() > other.unsigned_abs()
    }

    fn is_singular_pivot(&self, _epsilon: f64) -> bool {
        *self == 0
    }

    fn parse(text: &str) -> Option<i64> {
        text.parse().ok()
    }

    fn format(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
