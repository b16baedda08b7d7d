//! Direct solvers for dense linear systems
//!
//! This module provides direct (non-iterative) solvers:
//! - [`solve_gauss`]: in-place Gaussian elimination without pivoting
//! - [`LuFactorization`]: LU decomposition with partial pivoting, used for
//!   inverses and large determinants

mod gauss;
mod lu;

pub use gauss::{PIVOT_TOLERANCE, gauss_solve, solve_gauss};
pub use lu::LuFactorization;
