//! Error types shared by every kernel in the crate

use thiserror::Error;

/// Errors that can occur in the dense kernels
///
/// All conditions are detected synchronously before a result is produced;
/// a failed call never hands back a partially computed matrix.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LinalgError {
    #[error("Matrix dimensions mismatch in {operation}: expected {expected}, got {got}")]
    InvalidDimensions {
        operation: &'static str,
        expected: String,
        got: String,
    },
    #[error("Matrix is singular or needs pivoting: pivot {pivot} is {value:e}")]
    SingularMatrix { pivot: usize, value: f64 },
    #[error("No rule to compute the measure of a {rows}x{cols} jacobian")]
    UnsupportedJacobianShape { rows: usize, cols: usize },
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Category of a [`LinalgError`], for callers that only branch on the kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidDimensions,
    SingularMatrix,
    UnsupportedJacobianShape,
    InvalidConfig,
}

impl LinalgError {
    /// Shape precondition failure for `operation`
    pub(crate) fn dimensions(
        operation: &'static str,
        expected: impl Into<String>,
        got: impl Into<String>,
    ) -> Self {
        LinalgError::InvalidDimensions {
            operation,
            expected: expected.into(),
            got: got.into(),
        }
    }

    /// The category of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            LinalgError::InvalidDimensions { .. } => ErrorKind::InvalidDimensions,
            LinalgError::SingularMatrix { .. } => ErrorKind::SingularMatrix,
            LinalgError::UnsupportedJacobianShape { .. } => ErrorKind::UnsupportedJacobianShape,
            LinalgError::InvalidConfig(_) => ErrorKind::InvalidConfig,
        }
    }
}

/// Result alias used by all public operations
pub type Result<T> = std::result::Result<T, LinalgError>;
