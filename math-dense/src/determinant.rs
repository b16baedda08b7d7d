//! Determinant of square matrices
//!
//! Closed forms up to 3x3, so the small Jacobians of linear triangles,
//! quads and tetrahedra get the exact cofactor value. Larger matrices go
//! through a pivoted LU factorization.

use crate::config::InverseConfig;
use crate::direct::LuFactorization;
use crate::error::{LinalgError, Result};
use crate::traits::RealField;
use crate::types::{Matrix, shape_str};

/// Signed determinant of a square matrix
///
/// A singular matrix yields zero rather than an error. The empty matrix has
/// determinant one.
///
/// # Errors
///
/// - `InvalidDimensions` if `m` is not square
pub fn determinant<T: RealField>(m: &Matrix<T>) -> Result<T> {
    let n = m.nrows();
    if n != m.ncols() {
        return Err(LinalgError::dimensions(
            "determinant",
            "square matrix",
            shape_str(m),
        ));
    }

    let det = match n {
        0 => T::one(),
        1 => m[[0, 0]],
        2 => m[[0, 0]] * m[[1, 1]] - m[[0, 1]] * m[[1, 0]],
        3 => {
            m[[0, 0]] * (m[[1, 1]] * m[[2, 2]] - m[[1, 2]] * m[[2, 1]])
                - m[[0, 1]] * (m[[1, 0]] * m[[2, 2]] - m[[1, 2]] * m[[2, 0]])
                + m[[0, 2]] * (m[[1, 0]] * m[[2, 1]] - m[[1, 1]] * m[[2, 0]])
        }
        _ => {
            // Zero tolerance: only an exactly vanishing column is singular
            match LuFactorization::factorize(m, &InverseConfig::new(0.0)) {
                Ok(lu) => lu.determinant(),
                Err(LinalgError::SingularMatrix { .. }) => T::zero(),
                Err(e) => return Err(e),
            }
        }
    };
    Ok(det)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::{Array2, array};

    #[test]
    fn test_small_closed_forms() {
        assert_eq!(determinant(&array![[-3.5_f64]]).unwrap(), -3.5);
        assert_eq!(determinant(&array![[2.0_f64, 0.0], [0.0, 3.0]]).unwrap(), 6.0);
        assert_eq!(determinant(&array![[1.0_f64, 2.0], [3.0, 4.0]]).unwrap(), -2.0);
        assert_eq!(
            determinant(&array![[2.0_f64, 0.0, 1.0], [1.0, 3.0, 2.0], [1.0, 1.0, 2.0]]).unwrap(),
            6.0
        );
    }

    #[test]
    fn test_empty_is_one() {
        let m = Array2::<f64>::zeros((0, 0));
        assert_eq!(determinant(&m).unwrap(), 1.0);
    }

    #[test]
    fn test_large_triangular() {
        let mut m = Array2::<f64>::zeros((5, 5));
        for i in 0..5 {
            m[[i, i]] = (i + 1) as f64;
            for j in (i + 1)..5 {
                m[[i, j]] = 0.5;
            }
        }
        assert_relative_eq!(determinant(&m).unwrap(), 120.0, epsilon = 1e-10);
    }

    #[test]
    fn test_large_row_swap_flips_sign() {
        // Identity with rows 0 and 1 exchanged
        let mut m = Array2::<f64>::eye(4);
        m[[0, 0]] = 0.0;
        m[[1, 1]] = 0.0;
        m[[0, 1]] = 1.0;
        m[[1, 0]] = 1.0;
        assert_relative_eq!(determinant(&m).unwrap(), -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_large_singular_is_zero() {
        let mut m = Array2::<f64>::eye(4);
        m.row_mut(3).fill(0.0);
        assert_eq!(determinant(&m).unwrap(), 0.0);
    }

    #[test]
    fn test_non_square() {
        let m = array![[1.0_f64, 2.0, 3.0], [4.0, 5.0, 6.0]];
        assert!(determinant(&m).is_err());
    }
}
