//! Jacobian measures for integral transformation
//!
//! A Jacobian here has one row per reference (intrinsic) coordinate and one
//! column per physical (embedding) coordinate:
//!
//! ```text
//! J = [ dx/dxi   dy/dxi   dz/dxi  ]
//!     [ dx/deta  dy/deta  dz/deta ]
//! ```
//!
//! Its measure scales a reference volume, area or length element to the
//! physical one.

use crate::determinant::determinant;
use crate::error::{LinalgError, Result};
use crate::generalized::pseudo_inverse;
use crate::traits::RealField;
use crate::types::{Matrix, shape_str};

/// The Jacobian shapes a measure is defined for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JacobianShape {
    /// Square: the element has the dimension of the space it lives in
    Volume { dim: usize },
    /// 2x3: a surface element in 3-D
    Surface,
    /// 1xN: a line element in N-D
    Curve { dim: usize },
}

impl JacobianShape {
    /// Classify a `rows x cols` Jacobian
    ///
    /// Square wins over `1xN`, so a 1x1 Jacobian is a volume.
    pub fn classify(rows: usize, cols: usize) -> Result<Self> {
        if rows == cols {
            Ok(JacobianShape::Volume { dim: rows })
        } else if rows == 2 && cols == 3 {
            Ok(JacobianShape::Surface)
        } else if rows == 1 {
            Ok(JacobianShape::Curve { dim: cols })
        } else {
            log::debug!("jacobian_measure: no rule for a {}x{} jacobian", rows, cols);
            Err(LinalgError::UnsupportedJacobianShape { rows, cols })
        }
    }

    /// Reference element dimension (rows of the Jacobian)
    pub fn intrinsic_dim(&self) -> usize {
        match self {
            JacobianShape::Volume { dim } => *dim,
            JacobianShape::Surface => 2,
            JacobianShape::Curve { .. } => 1,
        }
    }

    /// Physical space dimension (columns of the Jacobian)
    pub fn embedding_dim(&self) -> usize {
        match self {
            JacobianShape::Volume { dim } | JacobianShape::Curve { dim } => *dim,
            JacobianShape::Surface => 3,
        }
    }
}

/// Scale factor between reference and physical integration elements
///
/// - square: the signed determinant
/// - 2x3: norm of the cross product of the two tangent rows (area scale)
/// - 1xN: Euclidean norm of the tangent row (length scale)
///
/// # Errors
///
/// `UnsupportedJacobianShape` for any other shape.
pub fn jacobian_measure<T: RealField>(j: &Matrix<T>) -> Result<T> {
    match JacobianShape::classify(j.nrows(), j.ncols())? {
        JacobianShape::Volume { .. } => determinant(j),
        JacobianShape::Surface => {
            let j1 = j[[0, 0]] * j[[1, 1]] - j[[0, 1]] * j[[1, 0]];
            let j2 = j[[0, 1]] * j[[1, 2]] - j[[0, 2]] * j[[1, 1]];
            let j3 = j[[0, 2]] * j[[1, 0]] - j[[0, 0]] * j[[1, 2]];
            Ok((j1 * j1 + j2 * j2 + j3 * j3).sqrt())
        }
        JacobianShape::Curve { .. } => {
            let sum = j.row(0).iter().fold(T::zero(), |acc, &v| acc + v * v);
            Ok(sum.sqrt())
        }
    }
}

/// Jacobian data for one integration point
///
/// Bundles the Jacobian with its measure and generalized inverse, which is
/// what an element integration loop needs to weight the point and to map
/// shape function gradients to physical coordinates.
#[derive(Debug, Clone)]
pub struct JacobianMap<T: RealField = f64> {
    /// Jacobian (intrinsic dim x embedding dim)
    pub matrix: Matrix<T>,
    /// Classified shape
    pub shape: JacobianShape,
    /// Measure from [`jacobian_measure`]
    pub measure: T,
    /// Generalized inverse (embedding dim x intrinsic dim)
    pub inverse: Matrix<T>,
}

impl<T: RealField> JacobianMap<T> {
    /// Build from a Jacobian matrix
    ///
    /// # Errors
    ///
    /// - `UnsupportedJacobianShape` if no measure rule applies
    /// - `InvalidDimensions` for an empty Jacobian
    /// - `SingularMatrix` for a degenerate element
    pub fn new(matrix: Matrix<T>) -> Result<Self> {
        let shape = JacobianShape::classify(matrix.nrows(), matrix.ncols())?;
        let measure = jacobian_measure(&matrix)?;
        let inverse = pseudo_inverse(&matrix)?;
        Ok(Self {
            matrix,
            shape,
            measure,
            inverse,
        })
    }

    /// Build from reference shape gradients and node coordinates
    ///
    /// `grad_ref` is (intrinsic dim x nodes), `coords` is (nodes x embedding
    /// dim), and `J = grad_ref · coords`.
    pub fn from_shape_gradients(grad_ref: &Matrix<T>, coords: &Matrix<T>) -> Result<Self> {
        if grad_ref.ncols() != coords.nrows() {
            return Err(LinalgError::dimensions(
                "jacobian_from_shape_gradients",
                format!("{} coordinate rows", grad_ref.ncols()),
                shape_str(coords),
            ));
        }
        Self::new(grad_ref.dot(coords))
    }

    /// Map reference gradients to physical ones: `dN/dX = J⁺ · dN/dR`
    ///
    /// `grad_ref` is (intrinsic dim x nodes); the result is
    /// (embedding dim x nodes).
    pub fn map_gradients(&self, grad_ref: &Matrix<T>) -> Result<Matrix<T>> {
        if grad_ref.nrows() != self.shape.intrinsic_dim() {
            return Err(LinalgError::dimensions(
                "map_gradients",
                format!("{} gradient rows", self.shape.intrinsic_dim()),
                shape_str(grad_ref),
            ));
        }
        Ok(self.inverse.dot(grad_ref))
    }
}
