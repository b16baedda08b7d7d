//! Gaussian elimination solver
//!
//! Solves small dense systems in place without pivoting. Element matrices
//! handed in by the FEM layer are expected to be well conditioned enough
//! that the diagonal never vanishes; when it does the call fails instead of
//! reordering rows, so the set of systems that succeed stays fixed.

use crate::error::{LinalgError, Result};
use crate::traits::{RealField, threshold};
use crate::types::{Matrix, Vector, shape_str};

/// Pivot magnitude at or below which elimination stops, and below which an
/// entry under the pivot is left as is
pub const PIVOT_TOLERANCE: f64 = 1.0e-8;

/// Solve `M x = X` in place by un-pivoted Gaussian elimination
///
/// On entry `x` holds the right-hand side, on success it holds the solution
/// and `m` has been reduced to the identity (up to entries skipped for being
/// below [`PIVOT_TOLERANCE`]). Shapes are checked before either argument is
/// touched.
///
/// # Errors
///
/// - `InvalidDimensions` if `m` is not square or `x.len() != m.nrows()`
/// - `SingularMatrix` if a pivot has magnitude `<= 1e-8` or is NaN; the
///   arguments are left partially eliminated
pub fn solve_gauss<T: RealField>(m: &mut Matrix<T>, x: &mut Vector<T>) -> Result<()> {
    let rows = m.nrows();
    let cols = m.ncols();
    if rows != cols {
        return Err(LinalgError::dimensions(
            "solve_gauss",
            "square matrix",
            shape_str(m),
        ));
    }
    if x.len() != rows {
        return Err(LinalgError::dimensions(
            "solve_gauss",
            format!("right-hand side of length {rows}"),
            format!("length {}", x.len()),
        ));
    }

    let tol: T = threshold(PIVOT_TOLERANCE)?;

    // Forward elimination
    for i in 0..rows {
        let p = m[[i, i]];
        if p.is_zero_approx(tol) {
            let value = p.to_f64().unwrap_or(f64::NAN);
            log::debug!("solve_gauss: pivot {} = {:e} needs pivoting", i, value);
            return Err(LinalgError::SingularMatrix { pivot: i, value });
        }
        for j in (i + 1)..rows {
            if m[[j, i]].abs() < tol {
                continue;
            }
            let coef = m[[j, i]] / p;
            for k in i..cols {
                let m_ik = m[[i, k]];
                m[[j, k]] -= coef * m_ik;
            }
            let x_i = x[i];
            x[j] -= coef * x_i;
        }
    }

    // Back substitution
    for i in (0..rows).rev() {
        for j in (i + 1)..cols {
            let m_ij = m[[i, j]];
            let x_j = x[j];
            x[i] -= m_ij * x_j;
            m[[i, j]] = T::zero();
        }
        let d = m[[i, i]];
        x[i] /= d;
        m[[i, i]] = T::one();
    }

    log::trace!("solve_gauss: solved {}x{} system", rows, cols);
    Ok(())
}

/// Solve `A x = b` with [`solve_gauss`], leaving the inputs untouched
///
/// This is a convenience function that works on copies of both arguments.
pub fn gauss_solve<T: RealField>(a: &Matrix<T>, b: &Vector<T>) -> Result<Vector<T>> {
    let mut m = a.clone();
    let mut x = b.clone();
    solve_gauss(&mut m, &mut x)?;
    Ok(x)
}
