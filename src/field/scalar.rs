use std::fmt;

use crate::error::{MatrixError, Result};
use crate::field::field::{FieldDisplay, FieldElement, FieldInfo, FieldKind};

/// A single value of any supported kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar {
    Integer(i64),
    Float32(f32),
}

impl Scalar {
    pub fn kind(&self) -> FieldKind {
        match self {
            Scalar::Integer(_) => FieldKind::Integer,
            Scalar::Float32(_) => FieldKind::Float32,
        }
    }

    pub fn info(&self) -> &'static FieldInfo {
        self.kind().info()
    }

    pub fn zero(kind: FieldKind) -> Scalar {
        match kind {
            FieldKind::Integer => Scalar::Integer(0),
            FieldKind::Float32 => Scalar::Float32(0.0),
        }
    }

    pub fn one(kind: FieldKind) -> Scalar {
        match kind {
            FieldKind::Integer => Scalar::Integer(1),
            FieldKind::Float32 => Scalar::Float32(1.0),
        }
    }

    pub fn parse(kind: FieldKind, text: &str) -> Option<Scalar> {
        match kind {
            FieldKind::Integer => i64::parse(text).map(Scalar::Integer),
            FieldKind::Float32 => f32::parse(text).map(Scalar::Float32),
        }
    }

    pub fn add(self, rhs: Scalar) -> Result<Scalar> {
        match (self, rhs) {
            (Scalar::Integer(a), Scalar::Integer(b)) => Ok(Scalar::Integer(a.field_add(b))),
            (Scalar::Float32(a), Scalar::Float32(b)) => Ok(Scalar::Float32(a.field_add(b))),
            _ => Err(MatrixError::TypeMismatch),
        }
    }

    pub fn sub(self, rhs: Scalar) -> Result<Scalar> {
        match (self, rhs) {
            (Scalar::Integer(a), Scalar::Integer(b)) => Ok(Scalar::Integer(a.field_sub(b))),
            (Scalar::Float32(a), Scalar::Float32(b)) => Ok(Scalar::Float32(a.field_sub(b))),
            _ => Err(MatrixError::TypeMismatch),
        }
    }

    pub fn mul(self, rhs: Scalar) -> Result<Scalar> {
        match (self, rhs) {
            (Scalar::Integer(a), Scalar::Integer(b)) => Ok(Scalar::Integer(a.field_mul(b))),
            (Scalar::Float32(a), Scalar::Float32(b)) => Ok(Scalar::Float32(a.field_mul(b))),
            _ => Err(MatrixError::TypeMismatch),
        }
    }

    pub fn div(self, rhs: Scalar) -> Result<Scalar> {
        match (self, rhs) {
            (Scalar::Integer(a), Scalar::Integer(b)) => a
                .field_div(b)
                .map(Scalar::Integer)
                .ok_or(MatrixError::DivisionByZero),
            (Scalar::Float32(a), Scalar::Float32(b)) => a
                .field_div(b)
                .map(Scalar::Float32)
                .ok_or(MatrixError::DivisionByZero),
            _ => Err(MatrixError::TypeMismatch),
        }
    }

    pub fn as_int(&self) -> Result<i64> {
        match self {
            Scalar::Integer(v) => Ok(*v),
            Scalar::Float32(_) => Err(MatrixError::TypeMismatch),
        }
    }

    pub fn as_float(&self) -> Result<f32> {
        match self {
            Scalar::Float32(v) => Ok(*v),
            Scalar::Integer(_) => Err(MatrixError::TypeMismatch),
        }
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Scalar {
        Scalar::Integer(value)
    }
}

impl From<f32> for Scalar {
    fn from(value: f32) -> Scalar {
        Scalar::Float32(value)
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Integer(v) => fmt::Display::fmt(&FieldDisplay(*v), f),
            Scalar::Float32(v) => fmt::Display::fmt(&FieldDisplay(*v), f),
        }
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
