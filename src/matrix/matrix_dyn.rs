use crate::error::{MatrixError, Result};
use crate::field::field::{types_equal, FieldElement, FieldInfo, FieldKind};
use crate::field::scalar::Scalar;
use crate::matrix::gauss::GaussConfig;
use crate::matrix::matrix::Matrix;
use crate::matrix::matrix_gen::MatrixGen;

/// Matrix whose scalar kind is chosen at runtime.
///
/// Operations combining two matrices, or a matrix and a [`Scalar`], fail with
/// [`MatrixError::TypeMismatch`] when the kinds differ.
#[derive(Debug, Clone, PartialEq)]
pub enum MatrixDyn {
    Integer(MatrixGen<i64>),
    Float32(MatrixGen<f32>),
}

macro_rules! dispatch {
    ($matrix:expr, $m:ident => $body:expr) => {
        match $matrix {
            MatrixDyn::Integer($m) => $body,
            MatrixDyn::Float32($m) => $body,
        }
    };
}

// Same as `dispatch!`, wrapping the matrix produced by `$body` back.
macro_rules! dispatch_wrap {
    ($matrix:expr, $m:ident => $body:expr) => {
        match $matrix {
            MatrixDyn::Integer($m) => MatrixDyn::Integer($body),
            MatrixDyn::Float32($m) => MatrixDyn::Float32($body),
        }
    };
}

fn unwrap_scalars<T>(values: &[Scalar], unwrap: fn(&Scalar) -> Result<T>) -> Result<Vec<T>> {
    values.iter().map(unwrap).collect()
}

impl MatrixDyn {
    pub fn new(rows: usize, cols: usize, kind: FieldKind) -> Result<MatrixDyn> {
        Ok(match kind {
            FieldKind::Integer => MatrixDyn::Integer(MatrixGen::new(rows, cols)?),
            FieldKind::Float32 => MatrixDyn::Float32(MatrixGen::new(rows, cols)?),
        })
    }

    pub fn identity_of(n: usize, kind: FieldKind) -> Result<MatrixDyn> {
        Ok(match kind {
            FieldKind::Integer => MatrixDyn::Integer(MatrixGen::identity_of(n)?),
            FieldKind::Float32 => MatrixDyn::Float32(MatrixGen::identity_of(n)?),
        })
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            MatrixDyn::Integer(_) => i64::KIND,
            MatrixDyn::Float32(_) => f32::KIND,
        }
    }

    pub fn field(&self) -> &'static FieldInfo {
        self.kind().info()
    }

    fn check_types(&self, rhs: &MatrixDyn) -> Result<()> {
        if !types_equal(self.field(), rhs.field()) {
            return Err(MatrixError::TypeMismatch);
        }
        Ok(())
    }
}

impl From<MatrixGen<i64>> for MatrixDyn {
    fn from(m: MatrixGen<i64>) -> MatrixDyn {
        MatrixDyn::Integer(m)
    }
}

impl From<MatrixGen<f32>> for MatrixDyn {
    fn from(m: MatrixGen<f32>) -> MatrixDyn {
        MatrixDyn::Float32(m)
    }
}

impl Matrix<Scalar> for MatrixDyn {
    /// The kind is taken from the first element; every other element must
    /// match it.
    fn from_list(lines: Vec<Vec<Scalar>>) -> Result<MatrixDyn> {
        let kind = lines
            .first()
            .and_then(|l| l.first())
            .map(Scalar::kind)
            .ok_or(MatrixError::InvalidSize)?;

        Ok(match kind {
            FieldKind::Integer => MatrixDyn::Integer(MatrixGen::from_list(
                lines
                    .iter()
                    .map(|l| unwrap_scalars(l, Scalar::as_int))
                    .collect::<Result<_>>()?,
            )?),
            FieldKind::Float32 => MatrixDyn::Float32(MatrixGen::from_list(
                lines
                    .iter()
                    .map(|l| unwrap_scalars(l, Scalar::as_float))
                    .collect::<Result<_>>()?,
            )?),
        })
    }

    fn to_list(&self) -> Vec<Vec<Scalar>> {
        dispatch!(self, m => m
            .to_list()
            .into_iter()
            .map(|line| line.into_iter().map(Scalar::from).collect())
            .collect())
    }

    fn rows(&self) -> usize {
        dispatch!(self, m => m.rows())
    }

    fn cols(&self) -> usize {
        dispatch!(self, m => m.cols())
    }

    fn get(&self, row: usize, col: usize) -> Result<Scalar> {
        dispatch!(self, m => m.get(row, col).map(Scalar::from))
    }

    fn set(&mut self, row: usize, col: usize, value: Scalar) -> Result<()> {
        match (self, value) {
            (MatrixDyn::Integer(m), Scalar::Integer(v)) => m.set(row, col, v),
            (MatrixDyn::Float32(m), Scalar::Float32(v)) => m.set(row, col, v),
            _ => Err(MatrixError::TypeMismatch),
        }
    }

    fn add(&self, rhs: &MatrixDyn) -> Result<MatrixDyn> {
        self.check_types(rhs)?;
        match (self, rhs) {
            (MatrixDyn::Integer(a), MatrixDyn::Integer(b)) => Ok(a.add(b)?.into()),
            (MatrixDyn::Float32(a), MatrixDyn::Float32(b)) => Ok(a.add(b)?.into()),
            _ => Err(MatrixError::TypeMismatch),
        }
    }

    fn multiply(&self, rhs: &MatrixDyn) -> Result<MatrixDyn> {
        self.check_types(rhs)?;
        match (self, rhs) {
            (MatrixDyn::Integer(a), MatrixDyn::Integer(b)) => Ok(a.multiply(b)?.into()),
            (MatrixDyn::Float32(a), MatrixDyn::Float32(b)) => Ok(a.multiply(b)?.into()),
            _ => Err(MatrixError::TypeMismatch),
        }
    }

    fn scalar_multiply(&self, scalar: Scalar) -> Result<MatrixDyn> {
        match (self, scalar) {
            (MatrixDyn::Integer(m), Scalar::Integer(v)) => Ok(m.scalar_multiply(v)?.into()),
            (MatrixDyn::Float32(m), Scalar::Float32(v)) => Ok(m.scalar_multiply(v)?.into()),
            _ => Err(MatrixError::TypeMismatch),
        }
    }

    fn add_linear_combination(&self, row_idx: usize, alphas: &[Scalar]) -> Result<MatrixDyn> {
        if row_idx >= self.rows() {
            return Err(MatrixError::InvalidIndex);
        }
        Ok(match self {
            MatrixDyn::Integer(m) => m
                .add_linear_combination(row_idx, &unwrap_scalars(alphas, Scalar::as_int)?)?
                .into(),
            MatrixDyn::Float32(m) => m
                .add_linear_combination(row_idx, &unwrap_scalars(alphas, Scalar::as_float)?)?
                .into(),
        })
    }

    fn try_clone(&self) -> Result<MatrixDyn> {
        Ok(dispatch_wrap!(self, m => m.try_clone()?))
    }

    fn fill(&mut self, value: Scalar) -> Result<()> {
        match (self, value) {
            (MatrixDyn::Integer(m), Scalar::Integer(v)) => m.fill(v),
            (MatrixDyn::Float32(m), Scalar::Float32(v)) => m.fill(v),
            _ => Err(MatrixError::TypeMismatch),
        }
    }

    fn identity(&mut self) -> Result<()> {
        dispatch!(self, m => m.identity())
    }

    fn transpose(&self) -> Result<MatrixDyn> {
        Ok(dispatch_wrap!(self, m => m.transpose()?))
    }

    fn gauss_solve(&self, b: &MatrixDyn, x: &mut MatrixDyn, config: &GaussConfig) -> Result<()> {
        self.check_types(b)?;
        self.check_types(x)?;
        match (self, b, x) {
            (MatrixDyn::Integer(a), MatrixDyn::Integer(b), MatrixDyn::Integer(x)) => {
                a.gauss_solve(b, x, config)
            }
            (MatrixDyn::Float32(a), MatrixDyn::Float32(b), MatrixDyn::Float32(x)) => {
                a.gauss_solve(b, x, config)
            }
            _ => Err(MatrixError::TypeMismatch),
        }
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
