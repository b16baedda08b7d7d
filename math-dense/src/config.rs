//! Configuration for the matrix inversion path
//!
//! The Gaussian solver threshold is a fixed constant
//! ([`PIVOT_TOLERANCE`](crate::PIVOT_TOLERANCE)) and is deliberately absent
//! here. Only inversion, used by the generalized inverse, takes a config.

use crate::error::{LinalgError, Result};
use serde::{Deserialize, Serialize};

/// Inversion configuration, embeddable in a JSON solver configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InverseConfig {
    /// Relative pivot tolerance: a pivot not exceeding
    /// `singular_tolerance * max|a_ij|` is treated as zero
    pub singular_tolerance: f64,
}

impl Default for InverseConfig {
    fn default() -> Self {
        Self {
            singular_tolerance: 1e-12,
        }
    }
}

impl InverseConfig {
    /// Create a config with the given relative tolerance
    pub fn new(singular_tolerance: f64) -> Self {
        Self { singular_tolerance }
    }

    /// Reject negative or non-finite tolerances
    pub fn validate(&self) -> Result<()> {
        if !self.singular_tolerance.is_finite() || self.singular_tolerance < 0.0 {
            return Err(LinalgError::InvalidConfig(format!(
                "singular_tolerance must be finite and non-negative, got {}",
                self.singular_tolerance
            )));
        }
        Ok(())
    }
}
