use crate::error::Result;
use crate::matrix::gauss::GaussConfig;

/// Operations shared by the statically typed and the runtime-kinded matrices.
///
/// Every operation producing a matrix returns a fresh, independently owned
/// value and leaves its operands untouched.
pub trait Matrix<T>
where
    Self: Sized,
{
    fn from_list(lines: Vec<Vec<T>>) -> Result<Self>;
    fn to_list(&self) -> Vec<Vec<T>>;

    fn rows(&self) -> usize;
    fn cols(&self) -> usize;

    fn get(&self, row: usize, col: usize) -> Result<T>;
    fn set(&mut self, row: usize, col: usize, value: T) -> Result<()>;

    fn add(&self, rhs: &Self) -> Result<Self>;
    fn multiply(&self, rhs: &Self) -> Result<Self>;
    fn scalar_multiply(&self, scalar: T) -> Result<Self>;

    /// Copy of `self` where row `row_idx` is replaced by
    /// `row_idx + sum(alphas[k] * row k)` over every other row `k`.
    ///
    /// `alphas` holds one coefficient per row; `alphas[row_idx]` is ignored.
    fn add_linear_combination(&self, row_idx: usize, alphas: &[T]) -> Result<Self>;

    /// Deep copy, reporting allocation failure instead of aborting.
    fn try_clone(&self) -> Result<Self>;

    fn fill(&mut self, value: T) -> Result<()>;

    /// Overwrites a square matrix with the identity.
    fn identity(&mut self) -> Result<()>;

    fn transpose(&self) -> Result<Self>;

    /// Solves `self * x = b` by Gauss elimination with partial pivoting.
    ///
    /// `x` is only written once the whole system has been solved.
    fn gauss_solve(&self, b: &Self, x: &mut Self, config: &GaussConfig) -> Result<()>;

    fn solve(&self, b: &Self) -> Result<Self> {
        let mut x = b.try_clone()?;
        self.gauss_solve(b, &mut x, &GaussConfig::default())?;
        Ok(x)
    }
}
