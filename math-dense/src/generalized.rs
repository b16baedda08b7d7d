//! Square and generalized matrix inverses
//!
//! The generalized inverse follows the normal-equations construction:
//! a left inverse for tall matrices, a right inverse for wide ones and the
//! ordinary inverse for square ones. No rank check is made beyond what the
//! inner square inversion detects.

use crate::config::InverseConfig;
use crate::direct::LuFactorization;
use crate::error::{LinalgError, Result};
use crate::traits::RealField;
use crate::types::{Matrix, shape_str};
use std::cmp::Ordering;

/// Inverse of a square, nonsingular matrix with the default config
pub fn inverse<T: RealField>(m: &Matrix<T>) -> Result<Matrix<T>> {
    inverse_with(m, &InverseConfig::default())
}

/// Inverse of a square, nonsingular matrix
///
/// # Errors
///
/// - `InvalidDimensions` if `m` is empty or not square
/// - `SingularMatrix` if a pivot falls under the relative tolerance
pub fn inverse_with<T: RealField>(m: &Matrix<T>, config: &InverseConfig) -> Result<Matrix<T>> {
    if m.is_empty() {
        return Err(LinalgError::dimensions(
            "inverse",
            "non-empty square matrix",
            shape_str(m),
        ));
    }
    let lu = LuFactorization::factorize(m, config)?;
    Ok(lu.inverse())
}

/// Generalized inverse with the default config
///
/// ```
/// use math_dense::{pseudo_inverse, matrix_from_values};
///
/// let m = matrix_from_values(1, 2, [3.0_f64, 4.0]).unwrap();
/// let p = pseudo_inverse(&m).unwrap();
/// assert!((m.dot(&p)[[0, 0]] - 1.0).abs() < 1e-12);
/// ```
pub fn pseudo_inverse<T: RealField>(m: &Matrix<T>) -> Result<Matrix<T>> {
    pseudo_inverse_with(m, &InverseConfig::default())
}

/// Generalized inverse `M⁺` of a possibly rectangular matrix
///
/// - rows > cols: `(Mᵀ M)⁻¹ Mᵀ`, so `M⁺ M = I`
/// - rows < cols: `Mᵀ (M Mᵀ)⁻¹`, so `M M⁺ = I`
/// - square: `M⁻¹`
///
/// The result has shape `cols x rows`; `m` is not modified.
///
/// # Errors
///
/// - `InvalidDimensions` if `m` has zero rows or zero columns
/// - `SingularMatrix` if the matrix to invert is singular, i.e. `m` lacks
///   full column (tall) or row (wide) rank
pub fn pseudo_inverse_with<T: RealField>(
    m: &Matrix<T>,
    config: &InverseConfig,
) -> Result<Matrix<T>> {
    let (rows, cols) = m.dim();
    if rows == 0 || cols == 0 {
        return Err(LinalgError::dimensions(
            "pseudo_inverse",
            "non-empty matrix",
            shape_str(m),
        ));
    }

    let result = match rows.cmp(&cols) {
        Ordering::Greater => {
            let mt = m.t();
            let normal = mt.dot(m);
            inverse_with(&normal, config).map(|inv| inv.dot(&mt))
        }
        Ordering::Less => {
            let normal = m.dot(&m.t());
            inverse_with(&normal, config).map(|inv| m.t().dot(&inv))
        }
        Ordering::Equal => inverse_with(m, config),
    };

    if let Err(LinalgError::SingularMatrix { .. }) = &result {
        log::debug!("pseudo_inverse: {}x{} matrix is rank deficient", rows, cols);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use approx::assert_abs_diff_eq;
    use ndarray::{Array2, array};

    fn assert_identity(m: &Matrix<f64>) {
        assert_eq!(m.nrows(), m.ncols());
        let eye = Array2::<f64>::eye(m.nrows());
        for i in 0..m.nrows() {
            for j in 0..m.ncols() {
                assert_abs_diff_eq!(m[[i, j]], eye[[i, j]], epsilon = 1e-10);
            }
        }
    }

    #[test]
    fn test_inverse_2x2() {
        let m = array![[4.0_f64, 7.0], [2.0, 6.0]];
        let inv = inverse(&m).expect("inverse should succeed");

        assert_abs_diff_eq!(inv[[0, 0]], 0.6, epsilon = 1e-12);
        assert_abs_diff_eq!(inv[[0, 1]], -0.7, epsilon = 1e-12);
        assert_abs_diff_eq!(inv[[1, 0]], -0.2, epsilon = 1e-12);
        assert_abs_diff_eq!(inv[[1, 1]], 0.4, epsilon = 1e-12);
    }

    #[test]
    fn test_inverse_rejects_empty_and_rectangular() {
        let empty = Array2::<f64>::zeros((0, 0));
        assert_eq!(
            inverse(&empty).unwrap_err().kind(),
            ErrorKind::InvalidDimensions
        );

        let wide = array![[1.0_f64, 2.0, 3.0]];
        assert_eq!(
            inverse(&wide).unwrap_err().kind(),
            ErrorKind::InvalidDimensions
        );
    }

    #[test]
    fn test_pseudo_inverse_square() {
        let m = array![[2.0_f64, 1.0, 1.0], [1.0, 3.0, 2.0], [1.0, 0.0, 0.0]];
        let p = pseudo_inverse(&m).expect("pseudo inverse should succeed");

        assert_identity(&m.dot(&p));
        assert_identity(&p.dot(&m));
    }

    #[test]
    fn test_pseudo_inverse_tall_is_left_inverse() {
        let m = array![[1.0_f64, 0.0], [0.0, 1.0], [1.0, 1.0]];
        let p = pseudo_inverse(&m).expect("pseudo inverse should succeed");

        assert_eq!(p.dim(), (2, 3));
        assert_identity(&p.dot(&m));
    }

    #[test]
    fn test_pseudo_inverse_wide_is_right_inverse() {
        let m = array![[1.0_f64, 2.0, 0.0], [0.0, 1.0, 1.0]];
        let p = pseudo_inverse(&m).expect("pseudo inverse should succeed");

        assert_eq!(p.dim(), (3, 2));
        assert_identity(&m.dot(&p));
    }

    #[test]
    fn test_pseudo_inverse_row_vector() {
        let m = array![[3.0_f64, 4.0]];
        let p = pseudo_inverse(&m).expect("pseudo inverse should succeed");

        assert_abs_diff_eq!(p[[0, 0]], 0.12, epsilon = 1e-12);
        assert_abs_diff_eq!(p[[1, 0]], 0.16, epsilon = 1e-12);
    }

    #[test]
    fn test_pseudo_inverse_does_not_modify_input() {
        let m = array![[1.0_f64, 2.0], [3.0, 4.0], [5.0, 6.0]];
        let before = m.clone();
        pseudo_inverse(&m).expect("pseudo inverse should succeed");
        assert_eq!(m, before);
    }

    #[test]
    fn test_pseudo_inverse_rank_deficient() {
        // Second column is twice the first
        let tall = array![[1.0_f64, 2.0], [2.0, 4.0], [3.0, 6.0]];
        assert_eq!(
            pseudo_inverse(&tall).unwrap_err().kind(),
            ErrorKind::SingularMatrix
        );

        let wide = array![[1.0_f64, 2.0, 3.0], [2.0, 4.0, 6.0]];
        assert_eq!(
            pseudo_inverse(&wide).unwrap_err().kind(),
            ErrorKind::SingularMatrix
        );

        let square = array![[1.0_f64, 2.0], [2.0, 4.0]];
        assert_eq!(
            pseudo_inverse(&square).unwrap_err().kind(),
            ErrorKind::SingularMatrix
        );
    }

    #[test]
    fn test_pseudo_inverse_empty() {
        let m = Array2::<f64>::zeros((0, 3));
        assert_eq!(
            pseudo_inverse(&m).unwrap_err().kind(),
            ErrorKind::InvalidDimensions
        );
    }

    #[test]
    fn test_pseudo_inverse_with_strict_tolerance() {
        // Nearly dependent columns pass with the default, fail when strict
        let m = array![[1.0_f64, 1.0], [1.0, 1.0 + 1e-4], [1.0, 1.0]];
        assert!(pseudo_inverse(&m).is_ok());

        let strict = InverseConfig::new(1e-6);
        assert_eq!(
            pseudo_inverse_with(&m, &strict).unwrap_err().kind(),
            ErrorKind::SingularMatrix
        );
    }
}
