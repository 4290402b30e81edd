use log::{debug, trace};

use crate::error::{MatrixError, Result};
use crate::field::field::FieldElement;
use crate::matrix::matrix::Matrix;
use crate::matrix::matrix_gen::MatrixGen;

/// Pivots below this magnitude make a floating point system singular.
pub const DEFAULT_EPSILON: f64 = 1e-10;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaussConfig {
    /// Singularity threshold for floating point pivots. Integer pivots are
    /// only singular when exactly zero.
    pub epsilon: f64,
    /// Skip rows whose entry in the pivot column is already zero.
    pub skip_zero_entries: bool,
}

impl Default for GaussConfig {
    fn default() -> Self {
        GaussConfig {
            epsilon: DEFAULT_EPSILON,
            skip_zero_entries: true,
        }
    }
}

impl GaussConfig {
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    pub fn with_skip_zero_entries(mut self, skip: bool) -> Self {
        self.skip_zero_entries = skip;
        self
    }
}

// [A | b]
fn augment<T: FieldElement>(a: &MatrixGen<T>, b: &MatrixGen<T>) -> Result<MatrixGen<T>> {
    let n = a.rows();
    let mut aug = MatrixGen::new(n, n + 1)?;
    for i in 0..n {
        for j in 0..n {
            aug.put(i, j, a.at(i, j));
        }
        aug.put(i, n, b.at(i, 0));
    }
    Ok(aug)
}

fn forward_elimination<T: FieldElement>(
    aug: &mut MatrixGen<T>,
    config: &GaussConfig,
) -> Result<()> {
    let n = aug.rows();

    for k in 0..n {
        let mut pivot_row = k;
        for i in k + 1..n {
            if aug.at(i, k).abs_gt(&aug.at(pivot_row, k)) {
                pivot_row = i;
            }
        }

        if aug.at(pivot_row, k).is_singular_pivot(config.epsilon) {
            debug!("Singular matrix: no usable pivot in column {}", k);
            return Err(MatrixError::SingularMatrix);
        }

        if pivot_row != k {
            trace!("Swapping rows {} and {}", k, pivot_row);
            aug.swap_rows(k, pivot_row);
        }

        let pivot = aug.at(k, k);
        for i in k + 1..n {
            let lead = aug.at(i, k);
            if config.skip_zero_entries && lead.is_zero() {
                continue;
            }

            let factor = lead
                .field_div(pivot)
                .ok_or(MatrixError::DivisionByZero)?;
            for j in k..=n {
                let value = aug.at(i, j).field_sub(factor.field_mul(aug.at(k, j)));
                aug.put(i, j, value);
            }
        }
    }

    Ok(())
}

fn back_substitution<T: FieldElement>(aug: &MatrixGen<T>) -> Result<Vec<T>> {
    let n = aug.rows();
    let mut solution = vec![T::zero(); n];

    for i in (0..n).rev() {
        let mut acc = aug.at(i, n);
        for j in i + 1..n {
            acc = acc.field_sub(aug.at(i, j).field_mul(solution[j]));
        }
        solution[i] = acc
            .field_div(aug.at(i, i))
            .ok_or(MatrixError::DivisionByZero)?;
    }

    Ok(solution)
}

/// Solves `a * x = b` for a square `a` and column vectors `b`, `x`.
///
/// All arithmetic goes through the element's field operations, so an integer
/// system is solved with truncating division at every step.
pub fn gauss_solve<T: FieldElement>(
    a: &MatrixGen<T>,
    b: &MatrixGen<T>,
    x: &mut MatrixGen<T>,
    config: &GaussConfig,
) -> Result<()> {
    let n = a.rows();
    if a.cols() != n || b.cols() != 1 || b.rows() != n || x.cols() != 1 || x.rows() != n {
        return Err(MatrixError::DimensionMismatch);
    }

    debug!("Gauss elimination on a {}x{} {} system", n, n, T::info().name);

    let mut aug = augment(a, b)?;
    forward_elimination(&mut aug, config)?;
    let solution = back_substitution(&aug)?;

    x.cells_mut().copy_from_slice(&solution);
    debug!("Gauss elimination done");
    Ok(())
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn column<T: FieldElement>(values: &[T]) -> MatrixGen<T> {
        MatrixGen::from_list(values.iter().map(|v| vec![*v]).collect()).unwrap()
    }

    fn assert_close(got: &[f32], expected: &[f32], tolerance: f32) {
        assert_eq!(got.len(), expected.len());
        for (g, e) in got.iter().zip(expected) {
            assert!((g - e).abs() < tolerance, "{:?} != {:?}", got, expected);
        }
    }

    #[test]
    fn test_gauss_float() {
        init_logger();

        let a = MatrixGen::<f32>::from_list(vec![
            vec![2.0, 1.0, -1.0],
            vec![1.0, 3.0, 2.0],
            vec![3.0, 2.0, -3.0],
        ])
        .unwrap();
        let b = column(&[7.0f32, 11.0, 9.0]);

        let mut x = MatrixGen::<f32>::new(3, 1).unwrap();
        a.gauss_solve(&b, &mut x, &GaussConfig::default()).unwrap();
        assert_close(x.cells(), &[3.5, 1.5, 1.5], 0.01);

        let check = a.multiply(&x).unwrap();
        assert_close(check.cells(), b.cells(), 0.01);

        // inputs are left untouched
        assert_eq!(b.cells(), &[7.0, 11.0, 9.0]);
        assert_eq!(a.get(2, 2), Ok(-3.0));
    }

    #[test]
    fn test_gauss_needs_pivoting() {
        init_logger();

        let a = MatrixGen::<f32>::from_list(vec![vec![0.0, 1.0], vec![1.0, 0.0]]).unwrap();
        let x = a.solve(&column(&[2.0f32, 3.0])).unwrap();
        assert_close(x.cells(), &[3.0, 2.0], 1e-6);

        let a = MatrixGen::<i64>::from_list(vec![vec![0, 2], vec![4, 0]]).unwrap();
        let x = a.solve(&column(&[6i64, 8])).unwrap();
        assert_eq!(x.cells(), &[2, 3]);
    }

    #[test]
    fn test_gauss_int() {
        init_logger();

        let a = MatrixGen::<i64>::from_list(vec![vec![2, 0], vec![0, 4]]).unwrap();
        let x = a.solve(&column(&[4i64, 8])).unwrap();
        assert_eq!(x.cells(), &[2, 2]);

        // truncating division at every step
        let x = a.solve(&column(&[5i64, 9])).unwrap();
        assert_eq!(x.cells(), &[2, 2]);
    }

    #[test]
    fn test_gauss_singular() {
        init_logger();

        let a = MatrixGen::<f32>::from_list(vec![vec![1.0, 2.0], vec![2.0, 4.0]]).unwrap();
        let b = column(&[3.0f32, 6.0]);
        let mut x = column(&[-1.0f32, -1.0]);
        assert_eq!(
            a.gauss_solve(&b, &mut x, &GaussConfig::default()),
            Err(MatrixError::SingularMatrix)
        );
        assert_eq!(x.cells(), &[-1.0, -1.0]);

        let a = MatrixGen::<i64>::from_list(vec![vec![0, 1], vec![0, 2]]).unwrap();
        assert_eq!(
            a.solve(&column(&[1i64, 2])),
            Err(MatrixError::SingularMatrix)
        );

        let a = MatrixGen::<f32>::new(3, 3).unwrap();
        assert_eq!(
            a.solve(&column(&[1.0f32, 2.0, 3.0])),
            Err(MatrixError::SingularMatrix)
        );
    }

    #[test]
    fn test_gauss_zero_pivot_without_epsilon() {
        let a = MatrixGen::<f32>::new(2, 2).unwrap();
        let b = column(&[1.0f32, 2.0]);
        let mut x = column(&[-1.0f32, -1.0]);

        let config = GaussConfig::default().with_epsilon(0.0);
        assert_eq!(
            a.gauss_solve(&b, &mut x, &config),
            Err(MatrixError::DivisionByZero)
        );
        assert_eq!(x.cells(), &[-1.0, -1.0]);
    }

    #[test]
    fn test_gauss_nan_pivot() {
        let a = MatrixGen::<f32>::from_list(vec![vec![f32::NAN, 0.0], vec![0.0, 1.0]]).unwrap();
        let b = column(&[1.0f32, 2.0]);
        let mut x = column(&[-1.0f32, -1.0]);

        assert_eq!(
            a.gauss_solve(&b, &mut x, &GaussConfig::default()),
            Err(MatrixError::SingularMatrix)
        );
        assert_eq!(x.cells(), &[-1.0, -1.0]);
    }

    #[test]
    fn test_gauss_epsilon() {
        let a = MatrixGen::<f32>::from_list(vec![vec![1e-6, 0.0], vec![0.0, 1e-6]]).unwrap();
        let b = column(&[1e-6f32, 2e-6]);
        let mut x = MatrixGen::<f32>::new(2, 1).unwrap();

        a.gauss_solve(&b, &mut x, &GaussConfig::default()).unwrap();
        assert_close(x.cells(), &[1.0, 2.0], 1e-3);

        let strict = GaussConfig::default().with_epsilon(1e-3);
        assert_eq!(
            a.gauss_solve(&b, &mut x, &strict),
            Err(MatrixError::SingularMatrix)
        );
    }

    #[test]
    fn test_gauss_without_zero_skip() {
        let a = MatrixGen::<f32>::from_list(vec![
            vec![4.0, 0.0, 1.0],
            vec![0.0, 2.0, 0.0],
            vec![0.0, 1.0, 3.0],
        ])
        .unwrap();
        let b = column(&[9.0f32, 4.0, 8.0]);

        let skip = a.solve(&b).unwrap();
        let mut full = MatrixGen::<f32>::new(3, 1).unwrap();
        let config = GaussConfig::default().with_skip_zero_entries(false);
        a.gauss_solve(&b, &mut full, &config).unwrap();

        assert_close(skip.cells(), &[1.75, 2.0, 2.0], 1e-5);
        assert_close(full.cells(), skip.cells(), 1e-6);
    }

    #[test]
    fn test_gauss_dimensions() {
        let square = MatrixGen::<f32>::identity_of(3).unwrap();
        let wide = MatrixGen::<f32>::new(3, 4).unwrap();
        let b = MatrixGen::<f32>::new(3, 1).unwrap();
        let short = MatrixGen::<f32>::new(2, 1).unwrap();
        let mut x = MatrixGen::<f32>::new(3, 1).unwrap();
        let config = GaussConfig::default();

        assert_eq!(
            wide.gauss_solve(&b, &mut x, &config),
            Err(MatrixError::DimensionMismatch)
        );
        assert_eq!(
            square.gauss_solve(&short, &mut x, &config),
            Err(MatrixError::DimensionMismatch)
        );
        assert_eq!(
            square.gauss_solve(&wide, &mut x, &config),
            Err(MatrixError::DimensionMismatch)
        );

        let mut bad_x = MatrixGen::<f32>::new(3, 2).unwrap();
        assert_eq!(
            square.gauss_solve(&b, &mut bad_x, &config),
            Err(MatrixError::DimensionMismatch)
        );
    }

    #[test]
    fn test_gauss_random_roundtrip() {
        init_logger();
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..20 {
            let n = rng.gen_range(1..7);
            // diagonally dominant, hence well conditioned
            let mut a = MatrixGen::<f32>::new(n, n).unwrap();
            for i in 0..n {
                for j in 0..n {
                    let v = if i == j {
                        rng.gen_range(20.0..30.0)
                    } else {
                        rng.gen_range(-2.0..2.0)
                    };
                    a.set(i, j, v).unwrap();
                }
            }
            let expected: Vec<f32> = (0..n).map(|_| rng.gen_range(-10.0..10.0)).collect();
            let b = a.multiply(&column(&expected)).unwrap();

            let x = a.solve(&b).unwrap();
            assert_close(x.cells(), &expected, 0.01);
        }
    }
}
