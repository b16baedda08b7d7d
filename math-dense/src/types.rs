//! Dense matrix and vector types
//!
//! The kernels work directly on `ndarray` containers; the aliases below only
//! fix the dimensionality and default the scalar to `f64`.

use crate::error::{LinalgError, Result};
use crate::traits::RealField;
use ndarray::{Array, Array1, Array2, Dimension};

/// Dense, row/column addressable matrix with runtime dimensions
pub type Matrix<T = f64> = Array2<T>;

/// Dense vector with runtime length
pub type Vector<T = f64> = Array1<T>;

/// Build a matrix from values given in row-major order
///
/// Fails with `InvalidDimensions` when the number of values does not equal
/// `rows * cols`.
///
/// ```
/// use math_dense::matrix_from_values;
///
/// let m = matrix_from_values(2, 3, [1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
/// assert_eq!(m[[1, 0]], 4.0);
/// ```
pub fn matrix_from_values<T, I>(rows: usize, cols: usize, values: I) -> Result<Matrix<T>>
where
    T: RealField,
    I: IntoIterator<Item = T>,
{
    let data: Vec<T> = values.into_iter().collect();
    if data.len() != rows * cols {
        return Err(LinalgError::dimensions(
            "matrix_from_values",
            format!("{} values for a {rows}x{cols} matrix", rows * cols),
            format!("{} values", data.len()),
        ));
    }

    Array2::from_shape_vec((rows, cols), data).map_err(|e| {
        LinalgError::dimensions("matrix_from_values", format!("{rows}x{cols}"), e.to_string())
    })
}

/// Build a vector from values in order
pub fn vector_from_values<T, I>(values: I) -> Vector<T>
where
    T: RealField,
    I: IntoIterator<Item = T>,
{
    values.into_iter().collect()
}

/// Largest absolute element-wise difference between two arrays of equal shape
///
/// Returns zero for empty arrays.
pub fn max_abs_diff<T, D>(a: &Array<T, D>, b: &Array<T, D>) -> Result<T>
where
    T: RealField,
    D: Dimension,
{
    if a.shape() != b.shape() {
        return Err(LinalgError::dimensions(
            "max_abs_diff",
            format!("{:?}", a.shape()),
            format!("{:?}", b.shape()),
        ));
    }

    Ok(a
        .iter()
        .zip(b.iter())
        .fold(T::zero(), |acc, (&x, &y)| acc.max((x - y).abs())))
}

/// Largest absolute entry of a matrix, zero when empty
pub(crate) fn max_abs<T: RealField>(m: &Matrix<T>) -> T {
    m.iter().fold(T::zero(), |acc, &v| acc.max(v.abs()))
}

/// `rows x cols` rendering used in error messages
pub(crate) fn shape_str<T>(m: &Matrix<T>) -> String {
    format!("{}x{}", m.nrows(), m.ncols())
}
