use num_traits::{One, Zero};
use std::fmt;
use std::str::FromStr;

use crate::error::MatrixError;

/// The scalar kinds a matrix can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Integer,
    Float32,
}

impl FieldKind {
    pub fn info(self) -> &'static FieldInfo {
        FieldInfo::get(self)
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.info().name)
    }
}

impl FromStr for FieldKind {
    type Err = MatrixError;

    fn from_str(s: &str) -> Result<Self, MatrixError> {
        match s {
            "int" => Ok(FieldKind::Integer),
            "float" => Ok(FieldKind::Float32),
            _ => Err(MatrixError::TypeMismatch),
        }
    }
}

/// Runtime description of a scalar kind.
///
/// Two descriptors are equal when their size and name agree, whichever
/// instance they come from.
#[derive(Debug, Clone, Copy, Eq)]
pub struct FieldInfo {
    pub size: usize,
    pub name: &'static str,
    pub kind: FieldKind,
}

static INT_FIELD_INFO: FieldInfo = FieldInfo::new(FieldKind::Integer);
static FLOAT_FIELD_INFO: FieldInfo = FieldInfo::new(FieldKind::Float32);

impl FieldInfo {
    pub const fn new(kind: FieldKind) -> Self {
        match kind {
            FieldKind::Integer => FieldInfo {
                size: std::mem::size_of::<i64>(),
                name: "int",
                kind,
            },
            FieldKind::Float32 => FieldInfo {
                size: std::mem::size_of::<f32>(),
                name: "float",
                kind,
            },
        }
    }

    /// Shared descriptor of `kind`, alive for the whole program.
    pub fn get(kind: FieldKind) -> &'static FieldInfo {
        match kind {
            FieldKind::Integer => &INT_FIELD_INFO,
            FieldKind::Float32 => &FLOAT_FIELD_INFO,
        }
    }
}

impl PartialEq for FieldInfo {
    fn eq(&self, rhs: &FieldInfo) -> bool {
        self.size == rhs.size && self.name == rhs.name
    }
}

pub fn types_equal(a: &FieldInfo, b: &FieldInfo) -> bool {
    a == b
}

/// Arithmetic and text conversion of one scalar kind.
///
/// Matrix algorithms only ever go through these methods, so the same code
/// serves every kind. `abs_gt` and `is_singular_pivot` are the two places
/// where elimination needs kind-specific behaviour.
pub trait FieldElement:
    Copy + Zero + One + PartialEq + fmt::Debug + Send + Sync + 'static
{
    const KIND: FieldKind;

    fn field_add(self, rhs: Self) -> Self;
    fn field_sub(self, rhs: Self) -> Self;
    fn field_mul(self, rhs: Self) -> Self;

    /// `None` when `rhs` is zero.
    fn field_div(self, rhs: Self) -> Option<Self>;

    /// `|self| > |other|`
    fn abs_gt(&self, other: &Self) -> bool;

    /// Whether `self` is too small to be used as an elimination pivot.
    fn is_singular_pivot(&self, epsilon: f64) -> bool;

    fn parse(text: &str) -> Option<Self>;
    fn format(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;

    fn info() -> &'static FieldInfo {
        FieldInfo::get(Self::KIND)
    }
}

/// Formats an element with its field's text representation.
pub struct FieldDisplay<T>(pub T);

impl<T: FieldElement> fmt::Display for FieldDisplay<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.format(f)
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
