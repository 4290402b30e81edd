use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyType;

use crate::error::MatrixError;
use crate::field::field::FieldKind;
use crate::field::scalar::Scalar;
use crate::matrix::matrix::Matrix;
use crate::matrix::matrix_dyn::MatrixDyn;

fn value_error(error: MatrixError) -> PyErr {
    PyValueError::new_err(error.to_string())
}

fn scalar_to_py(py: Python, value: Scalar) -> PyResult<PyObject> {
    Ok(match value {
        Scalar::Integer(v) => v.into_pyobject(py)?.into_any().unbind(),
        Scalar::Float32(v) => v.into_pyobject(py)?.into_any().unbind(),
    })
}

fn scalar_from_py(kind: FieldKind, value: &Bound<PyAny>) -> PyResult<Scalar> {
    Ok(match kind {
        FieldKind::Integer => Scalar::Integer(value.extract()?),
        FieldKind::Float32 => Scalar::Float32(value.extract()?),
    })
}

#[derive(Debug, Clone)]
#[pyclass(name = "Matrix")]
pub struct PyMatrix {
    inner: MatrixDyn,
}

impl From<MatrixDyn> for PyMatrix {
    fn from(inner: MatrixDyn) -> Self {
        PyMatrix { inner }
    }
}

#[pymethods]
impl PyMatrix {
    #[classmethod]
    pub fn from_int_list(_cls: &Bound<PyType>, lines: Vec<Vec<i64>>) -> PyResult<Self> {
        MatrixDyn::from_list(
            lines
                .into_iter()
                .map(|l| l.into_iter().map(Scalar::Integer).collect())
                .collect(),
        )
        .map(PyMatrix::from)
        .map_err(value_error)
    }

    #[classmethod]
    pub fn from_float_list(_cls: &Bound<PyType>, lines: Vec<Vec<f32>>) -> PyResult<Self> {
        MatrixDyn::from_list(
            lines
                .into_iter()
                .map(|l| l.into_iter().map(Scalar::Float32).collect())
                .collect(),
        )
        .map(PyMatrix::from)
        .map_err(value_error)
    }

    #[classmethod]
    pub fn zeros(_cls: &Bound<PyType>, rows: usize, cols: usize, kind: &str) -> PyResult<Self> {
        let kind = kind.parse::<FieldKind>().map_err(value_error)?;
        MatrixDyn::new(rows, cols, kind)
            .map(PyMatrix::from)
            .map_err(value_error)
    }

    pub fn to_list(&self, py: Python) -> PyResult<Vec<Vec<PyObject>>> {
        self.inner
            .to_list()
            .into_iter()
            .map(|line| line.into_iter().map(|v| scalar_to_py(py, v)).collect())
            .collect()
    }

    pub fn get(&self, py: Python, row: usize, col: usize) -> PyResult<PyObject> {
        scalar_to_py(py, self.inner.get(row, col).map_err(value_error)?)
    }

    pub fn set(&mut self, row: usize, col: usize, value: &Bound<PyAny>) -> PyResult<()> {
        let value = scalar_from_py(self.inner.kind(), value)?;
        self.inner.set(row, col, value).map_err(value_error)
    }

    pub fn __add__(&self, rhs: PyRef<PyMatrix>) -> PyResult<PyMatrix> {
        self.inner
            .add(&rhs.inner)
            .map(PyMatrix::from)
            .map_err(value_error)
    }

    pub fn __mul__(&self, rhs: PyRef<PyMatrix>) -> PyResult<PyMatrix> {
        self.inner
            .multiply(&rhs.inner)
            .map(PyMatrix::from)
            .map_err(value_error)
    }

    pub fn scale(&self, scalar: &Bound<PyAny>) -> PyResult<PyMatrix> {
        let scalar = scalar_from_py(self.inner.kind(), scalar)?;
        self.inner
            .scalar_multiply(scalar)
            .map(PyMatrix::from)
            .map_err(value_error)
    }

    pub fn add_linear_combination(
        &self,
        row_idx: usize,
        alphas: Vec<Bound<PyAny>>,
    ) -> PyResult<PyMatrix> {
        let alphas = alphas
            .iter()
            .map(|a| scalar_from_py(self.inner.kind(), a))
            .collect::<PyResult<Vec<_>>>()?;
        self.inner
            .add_linear_combination(row_idx, &alphas)
            .map(PyMatrix::from)
            .map_err(value_error)
    }

    pub fn fill(&mut self, value: &Bound<PyAny>) -> PyResult<()> {
        let value = scalar_from_py(self.inner.kind(), value)?;
        self.inner.fill(value).map_err(value_error)
    }

    pub fn identity(&mut self) -> PyResult<()> {
        self.inner.identity().map_err(value_error)
    }

    pub fn solve(&self, b: PyRef<PyMatrix>) -> PyResult<PyMatrix> {
        self.inner
            .solve(&b.inner)
            .map(PyMatrix::from)
            .map_err(value_error)
    }

    #[getter]
    pub fn rows(&self) -> usize {
        self.inner.rows()
    }

    #[getter]
    pub fn cols(&self) -> usize {
        self.inner.cols()
    }

    #[getter]
    pub fn kind(&self) -> String {
        self.inner.kind().to_string()
    }

    pub fn __str__(&self) -> String {
        self.inner.to_string()
    }
}
