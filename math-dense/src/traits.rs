//! Core traits for dense linear algebra
//!
//! This module defines the scalar abstraction used throughout the crate:
//! - [`RealField`]: Trait for the real floating-point types the kernels run on

use crate::error::{LinalgError, Result};
use num_traits::{Float, FromPrimitive, NumAssign, ToPrimitive};
use std::fmt::Debug;

/// Trait for scalar types that can be used in the dense kernels.
///
/// Thresholds in this crate are documented as `f64` constants and converted
/// with [`FromPrimitive::from_f64`], so the same kernel code serves both
/// precisions.
///
/// # Implementations
///
/// Provided for:
/// - `f64` (default, used by the FEM element layer)
/// - `f32` (for memory-constrained applications)
pub trait RealField:
    Float + NumAssign + FromPrimitive + ToPrimitive + Copy + Send + Sync + Debug + 'static
{
    /// Check if this is approximately zero
    ///
    /// NaN is never bounded away from zero, so it counts as zero.
    #[inline]
    fn is_zero_approx(self, tol: Self) -> bool {
        !(self.abs() > tol)
    }
}

impl RealField for f64 {}

impl RealField for f32 {}

/// Convert an `f64` threshold into the kernel's scalar type
pub(crate) fn threshold<T: RealField>(value: f64) -> Result<T> {
    T::from_f64(value).ok_or_else(|| {
        LinalgError::InvalidConfig(format!("threshold {value:e} is not representable"))
    })
}
