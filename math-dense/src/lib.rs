//! Dense linear algebra kernels for FEM element integration
//!
//! This crate provides the small dense routines an element integration
//! layer calls at every integration point. Inputs are fully formed
//! `ndarray` matrices and vectors owned by the caller.
//!
//! # Features
//!
//! - **Linear Solver**: in-place Gaussian elimination without pivoting
//!   ([`solve_gauss`])
//! - **Generalized Inverse**: left, right or ordinary inverse selected by
//!   shape ([`pseudo_inverse`])
//! - **Jacobian Measure**: determinant, surface area or curve length scale
//!   ([`jacobian_measure`])
//! - **LU Decomposition**: partial pivoting, reusable across right-hand sides
//! - **Generic Scalar Types**: Works with f64 and f32
//!
//! # Example
//!
//! ```
//! use math_dense::{jacobian_measure, pseudo_inverse, solve_gauss};
//! use ndarray::array;
//!
//! let mut m = array![[2.0_f64, 1.0], [1.0, 3.0]];
//! let mut x = array![3.0, 5.0];
//! solve_gauss(&mut m, &mut x)?;
//! assert!((x[0] - 0.8).abs() < 1e-12);
//!
//! let surface = array![[1.0, 0.0, 0.0], [0.0, 1.0, 0.0]];
//! assert_eq!(jacobian_measure(&surface)?, 1.0);
//!
//! let tall = array![[1.0, 0.0], [0.0, 1.0], [1.0, 1.0]];
//! let left = pseudo_inverse(&tall)?;
//! assert_eq!(left.dim(), (2, 3));
//! # Ok::<(), math_dense::LinalgError>(())
//! ```

pub mod config;
pub mod determinant;
pub mod direct;
pub mod error;
pub mod generalized;
pub mod jacobian;
pub mod traits;
pub mod types;

// Re-export main types
pub use config::InverseConfig;
pub use error::{ErrorKind, LinalgError, Result};
pub use traits::RealField;
pub use types::{Matrix, Vector, matrix_from_values, max_abs_diff, vector_from_values};

// Re-export solvers
pub use direct::{LuFactorization, PIVOT_TOLERANCE, gauss_solve, solve_gauss};

// Re-export inverses and measures
pub use determinant::determinant;
pub use generalized::{inverse, inverse_with, pseudo_inverse, pseudo_inverse_with};
pub use jacobian::{JacobianMap, JacobianShape, jacobian_measure};
