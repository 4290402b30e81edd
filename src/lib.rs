//! Dense matrices over interchangeable scalar kinds.
//!
//! [`MatrixGen`] is the statically typed engine, [`MatrixDyn`] selects the
//! scalar kind at runtime and dispatches to it.

#[cfg(feature = "python")]
use pyo3::prelude::*;

pub mod error;

pub mod field {
    pub mod field;
    pub mod field_float;
    pub mod field_int;
    pub mod scalar;
}
pub mod matrix {
    pub mod gauss;
    pub mod matrix;
    pub mod matrix_dyn;
    pub mod matrix_gen;
    pub mod text;
}

#[cfg(feature = "python")]
pub mod python;

pub use error::{MatrixError, ReadError, Result};
pub use field::field::{types_equal, FieldElement, FieldInfo, FieldKind};
pub use field::scalar::Scalar;
pub use matrix::gauss::GaussConfig;
pub use matrix::matrix::Matrix;
pub use matrix::matrix_dyn::MatrixDyn;
pub use matrix::matrix_gen::MatrixGen;

/// A Python module implemented in Rust.
#[cfg(feature = "python")]
#[pymodule]
fn field_matrix(_py: Python, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<python::PyMatrix>()?;
    Ok(())
}
