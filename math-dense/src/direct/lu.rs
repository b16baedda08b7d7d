//! LU decomposition with partial pivoting
//!
//! Backs the square inverse used by the generalized inverse and the
//! determinant of matrices larger than 3x3. Unlike [`solve_gauss`], rows are
//! reordered by largest magnitude, and the singularity test is relative to
//! the largest entry of the input.
//!
//! [`solve_gauss`]: crate::solve_gauss

use crate::config::InverseConfig;
use crate::error::{LinalgError, Result};
use crate::traits::{RealField, threshold};
use crate::types::{Matrix, Vector, max_abs, shape_str};
use ndarray::{Array2, ArrayViewMut1, Axis};

/// LU factorization result
///
/// Stores `P A = L U` with L unit lower triangular below the diagonal and U
/// on and above it.
#[derive(Debug, Clone)]
pub struct LuFactorization<T: RealField> {
    /// Combined L and U factors
    lu: Matrix<T>,
    /// Row permutation: row `i` of the factors is row `perm[i]` of the input
    perm: Vec<usize>,
    /// Number of row swaps (for the determinant sign)
    swaps: usize,
    /// Matrix dimension
    n: usize,
}

impl<T: RealField> LuFactorization<T> {
    /// Factorize a square matrix
    ///
    /// # Errors
    ///
    /// - `InvalidDimensions` if `a` is not square
    /// - `InvalidConfig` if `config` fails validation
    /// - `SingularMatrix` if the largest candidate pivot of a column does not
    ///   exceed `config.singular_tolerance * max|a_ij|`
    pub fn factorize(a: &Matrix<T>, config: &InverseConfig) -> Result<Self> {
        let n = a.nrows();
        if n != a.ncols() {
            return Err(LinalgError::dimensions(
                "lu_factorize",
                "square matrix",
                shape_str(a),
            ));
        }
        config.validate()?;

        let cutoff = threshold::<T>(config.singular_tolerance)? * max_abs(a);
        let mut lu = a.clone();
        let mut perm: Vec<usize> = (0..n).collect();
        let mut swaps = 0;

        for k in 0..n {
            // Find pivot
            let mut max_val = lu[[k, k]].abs();
            let mut max_row = k;
            for i in (k + 1)..n {
                let val = lu[[i, k]].abs();
                if val > max_val {
                    max_val = val;
                    max_row = i;
                }
            }

            // Check for singularity
            if max_val.is_zero_approx(cutoff) {
                let value = max_val.to_f64().unwrap_or(f64::NAN);
                log::debug!(
                    "lu_factorize: column {} has no usable pivot ({:e} <= {:e})",
                    k,
                    value,
                    cutoff.to_f64().unwrap_or(0.0)
                );
                return Err(LinalgError::SingularMatrix { pivot: k, value });
            }

            // Swap rows if needed
            if max_row != k {
                for j in 0..n {
                    lu.swap([k, j], [max_row, j]);
                }
                perm.swap(k, max_row);
                swaps += 1;
            }

            // Compute multipliers and eliminate
            let pivot = lu[[k, k]];
            for i in (k + 1)..n {
                let mult = lu[[i, k]] / pivot;
                lu[[i, k]] = mult;
                for j in (k + 1)..n {
                    let update = mult * lu[[k, j]];
                    lu[[i, j]] -= update;
                }
            }
        }

        Ok(Self {
            lu,
            perm,
            swaps,
            n,
        })
    }

    /// Matrix dimension
    pub fn dim(&self) -> usize {
        self.n
    }

    /// Solve `A x = b` using the pre-computed factorization
    pub fn solve(&self, b: &Vector<T>) -> Result<Vector<T>> {
        if b.len() != self.n {
            return Err(LinalgError::dimensions(
                "lu_solve",
                format!("right-hand side of length {}", self.n),
                format!("length {}", b.len()),
            ));
        }

        let mut x: Vector<T> = self.perm.iter().map(|&p| b[p]).collect();
        self.substitute(x.view_mut());
        Ok(x)
    }

    /// Solve `A X = B` for every column of `B`
    pub fn solve_matrix(&self, b: &Matrix<T>) -> Result<Matrix<T>> {
        if b.nrows() != self.n {
            return Err(LinalgError::dimensions(
                "lu_solve_matrix",
                format!("{} rows", self.n),
                shape_str(b),
            ));
        }

        let mut x = b.select(Axis(0), &self.perm);
        for column in x.columns_mut() {
            self.substitute(column);
        }
        Ok(x)
    }

    /// Inverse, from solving `A A⁻¹ = I`
    pub fn inverse(&self) -> Matrix<T> {
        let mut inv = Array2::zeros((self.n, self.n));
        for (i, &p) in self.perm.iter().enumerate() {
            inv[[i, p]] = T::one();
        }
        for column in inv.columns_mut() {
            self.substitute(column);
        }
        inv
    }

    /// Determinant: product of U's diagonal, sign flipped per row swap
    pub fn determinant(&self) -> T {
        let sign = if self.swaps % 2 == 0 {
            T::one()
        } else {
            -T::one()
        };
        (0..self.n).fold(sign, |acc, i| acc * self.lu[[i, i]])
    }

    /// Forward then backward substitution on an already permuted column
    fn substitute(&self, mut x: ArrayViewMut1<'_, T>) {
        // Forward substitution: L y = P b
        for i in 0..self.n {
            for j in 0..i {
                let l_ij = self.lu[[i, j]];
                let x_j = x[j];
                x[i] -= l_ij * x_j;
            }
        }

        // Backward substitution: U x = y
        for i in (0..self.n).rev() {
            for j in (i + 1)..self.n {
                let u_ij = self.lu[[i, j]];
                let x_j = x[j];
                x[i] -= u_ij * x_j;
            }
            let u_ii = self.lu[[i, i]];
            x[i] /= u_ii;
        }
    }
}
