use std::io;
use thiserror::Error;

/// Every way an engine operation can fail.
///
/// Operations check all of their preconditions before touching any buffer,
/// so an `Err` always means the inputs were left as they were.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixError {
    #[error("Memory allocation failed")]
    OutOfMemory,
    #[error("Invalid matrix size")]
    InvalidSize,
    #[error("Element types do not match")]
    TypeMismatch,
    #[error("Matrix dimensions do not match")]
    DimensionMismatch,
    #[error("Index out of range")]
    InvalidIndex,
    #[error("Singular matrix")]
    SingularMatrix,
    #[error("Division by zero")]
    DivisionByZero,
}

impl MatrixError {
    /// Status code of the error, `0` being reserved for success.
    pub fn code(&self) -> i32 {
        match self {
            MatrixError::OutOfMemory => -2,
            MatrixError::InvalidSize => -3,
            MatrixError::TypeMismatch => -4,
            MatrixError::DimensionMismatch => -5,
            MatrixError::InvalidIndex => -6,
            MatrixError::SingularMatrix => -7,
            MatrixError::DivisionByZero => -8,
        }
    }
}

pub type Result<T> = std::result::Result<T, MatrixError>;

/// Failure while parsing a matrix from text.
#[derive(Error, Debug)]
pub enum ReadError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Matrix(#[from] MatrixError),
    #[error("Invalid {field} element at position {position}: {token:?}")]
    InvalidElement {
        field: &'static str,
        position: usize,
        token: String,
    },
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
