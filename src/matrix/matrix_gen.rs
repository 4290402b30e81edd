use std::ops;

use crate::error::{MatrixError, Result};
use crate::field::field::FieldElement;
use crate::matrix::gauss::{self, GaussConfig};
use crate::matrix::matrix::Matrix;

/// Dense row-major matrix over one scalar kind.
///
/// Invariant: `rows > 0`, `cols > 0` and `cells.len() == rows * cols`.
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixGen<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

fn checked_len<T>(rows: usize, cols: usize) -> Result<usize> {
    if rows == 0 || cols == 0 {
        return Err(MatrixError::InvalidSize);
    }
    let len = rows.checked_mul(cols).ok_or(MatrixError::InvalidSize)?;
    len.checked_mul(std::mem::size_of::<T>())
        .ok_or(MatrixError::InvalidSize)?;
    Ok(len)
}

fn reserve_cells<T>(len: usize) -> Result<Vec<T>> {
    let mut cells = Vec::new();
    cells
        .try_reserve_exact(len)
        .map_err(|_| MatrixError::OutOfMemory)?;
    Ok(cells)
}

fn alloc_cells<T: Clone>(len: usize, value: T) -> Result<Vec<T>> {
    let mut cells = reserve_cells(len)?;
    cells.resize(len, value);
    Ok(cells)
}

impl<T: FieldElement> MatrixGen<T> {
    /// Zero-filled `rows x cols` matrix.
    pub fn new(rows: usize, cols: usize) -> Result<MatrixGen<T>> {
        let len = checked_len::<T>(rows, cols)?;
        Ok(MatrixGen {
            rows,
            cols,
            cells: alloc_cells(len, T::zero())?,
        })
    }

    pub fn identity_of(n: usize) -> Result<MatrixGen<T>> {
        let mut m = MatrixGen::new(n, n)?;
        m.identity()?;
        Ok(m)
    }

    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [T] {
        &mut self.cells
    }

    fn index(&self, row: usize, col: usize) -> Result<usize> {
        if row >= self.rows || col >= self.cols {
            return Err(MatrixError::InvalidIndex);
        }
        Ok(row * self.cols + col)
    }

    #[inline(always)]
    pub(crate) fn at(&self, row: usize, col: usize) -> T {
        self.cells[row * self.cols + col]
    }

    #[inline(always)]
    pub(crate) fn put(&mut self, row: usize, col: usize, value: T) {
        self.cells[row * self.cols + col] = value;
    }

    pub(crate) fn swap_rows(&mut self, a: usize, b: usize) {
        for k in 0..self.cols {
            self.cells.swap(a * self.cols + k, b * self.cols + k);
        }
    }
}

impl<T: FieldElement> Matrix<T> for MatrixGen<T> {
    fn from_list(lines: Vec<Vec<T>>) -> Result<MatrixGen<T>> {
        let rows = lines.len();
        let cols = lines.first().map(|l| l.len()).unwrap_or(0);
        let len = checked_len::<T>(rows, cols)?;
        if lines.iter().any(|l| l.len() != cols) {
            return Err(MatrixError::DimensionMismatch);
        }

        let mut cells = reserve_cells(len)?;
        cells.extend(lines.into_iter().flatten());

        Ok(MatrixGen { rows, cols, cells })
    }

    fn to_list(&self) -> Vec<Vec<T>> {
        self.cells
            .chunks(self.cols)
            .map(|line| line.into())
            .collect()
    }

    fn rows(&self) -> usize {
        self.rows
    }

    fn cols(&self) -> usize {
        self.cols
    }

    fn get(&self, row: usize, col: usize) -> Result<T> {
        Ok(self.cells[self.index(row, col)?])
    }

    fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        let idx = self.index(row, col)?;
        self.cells[idx] = value;
        Ok(())
    }

    fn add(&self, rhs: &MatrixGen<T>) -> Result<MatrixGen<T>> {
        if self.cols != rhs.cols || self.rows != rhs.rows {
            return Err(MatrixError::DimensionMismatch);
        }

        let mut cells = reserve_cells(self.cells.len())?;
        cells.extend(
            self.cells
                .iter()
                .zip(rhs.cells.iter())
                .map(|(a, b)| a.field_add(*b)),
        );

        Ok(MatrixGen {
            rows: self.rows,
            cols: self.cols,
            cells,
        })
    }

    fn multiply(&self, rhs: &MatrixGen<T>) -> Result<MatrixGen<T>> {
        if self.cols != rhs.rows {
            return Err(MatrixError::DimensionMismatch);
        }

        let mut result = MatrixGen::new(self.rows, rhs.cols)?;
        for i in 0..self.rows {
            for j in 0..rhs.cols {
                let acc = (0..self.cols).fold(T::zero(), |acc, k| {
                    acc.field_add(self.at(i, k).field_mul(rhs.at(k, j)))
                });
                result.put(i, j, acc);
            }
        }
        Ok(result)
    }

    fn scalar_multiply(&self, scalar: T) -> Result<MatrixGen<T>> {
        let mut result = self.try_clone()?;
        result
            .cells
            .iter_mut()
            .for_each(|x| *x = x.field_mul(scalar));
        Ok(result)
    }

    fn add_linear_combination(&self, row_idx: usize, alphas: &[T]) -> Result<MatrixGen<T>> {
        if row_idx >= self.rows {
            return Err(MatrixError::InvalidIndex);
        }
        if alphas.len() != self.rows {
            return Err(MatrixError::DimensionMismatch);
        }

        let mut result = self.try_clone()?;
        for j in 0..self.cols {
            let sum = alphas
                .iter()
                .enumerate()
                .filter(|(k, _)| *k != row_idx)
                .fold(T::zero(), |acc, (k, alpha)| {
                    acc.field_add(alpha.field_mul(self.at(k, j)))
                });
            result.put(row_idx, j, self.at(row_idx, j).field_add(sum));
        }
        Ok(result)
    }

    fn try_clone(&self) -> Result<MatrixGen<T>> {
        let mut cells = reserve_cells(self.cells.len())?;
        cells.extend_from_slice(&self.cells);

        Ok(MatrixGen {
            rows: self.rows,
            cols: self.cols,
            cells,
        })
    }

    fn fill(&mut self, value: T) -> Result<()> {
        self.cells.fill(value);
        Ok(())
    }

    fn identity(&mut self) -> Result<()> {
        if self.rows != self.cols {
            return Err(MatrixError::DimensionMismatch);
        }
        self.cells.fill(T::zero());
        for i in 0..self.rows {
            self.put(i, i, T::one());
        }
        Ok(())
    }

    fn transpose(&self) -> Result<MatrixGen<T>> {
        let mut result = MatrixGen::new(self.cols, self.rows)?;
        for r in 0..self.rows {
            for c in 0..self.cols {
                result.put(c, r, self.at(r, c));
            }
        }
        Ok(result)
    }

    fn gauss_solve(
        &self,
        b: &MatrixGen<T>,
        x: &mut MatrixGen<T>,
        config: &GaussConfig,
    ) -> Result<()> {
        gauss::gauss_solve(self, b, x, config)
    }
}

impl<T: FieldElement> ops::Add<&MatrixGen<T>> for &MatrixGen<T> {
    type Output = Result<MatrixGen<T>>;

    fn add(self, rhs: &MatrixGen<T>) -> Result<MatrixGen<T>> {
        Matrix::add(self, rhs)
    }
}

impl<T: FieldElement> ops::Mul<&MatrixGen<T>> for &MatrixGen<T> {
    type Output = Result<MatrixGen<T>>;

    fn mul(self, rhs: &MatrixGen<T>) -> Result<MatrixGen<T>> {
        self.multiply(rhs)
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
