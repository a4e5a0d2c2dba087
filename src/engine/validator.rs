//! Input validation for the checked averaging API.
//!
//! ## Purpose
//!
//! The engine entry points trust their callers. This module checks the
//! documented preconditions (array lengths, weight count, weight and block
//! size values, variable-weight bounds) for the builder and the
//! `AverageVectors` model.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Length checks run before per-element scans.
//! * **NaN data is valid**: Only weights and block sizes are scanned for
//!   non-finite values; NaNs in the arrays are handled by the kernel.
//!
//! ## Non-goals
//!
//! * This module does not correct or filter invalid inputs.
//! * This module does not perform the averaging itself.

// Internal dependencies
use crate::primitives::errors::AverageError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for averaging configuration and input data.
///
/// Provides static methods returning `Result<(), AverageError>` that fail
/// fast upon the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate that every array holds at least `n` elements.
    pub fn validate_arrays<S>(arrays: &[&[S]], n: usize) -> Result<(), AverageError> {
        for (index, array) in arrays.iter().enumerate() {
            if array.len() < n {
                return Err(AverageError::ArrayTooShort {
                    index,
                    len: array.len(),
                    n,
                });
            }
        }
        Ok(())
    }

    /// Validate that there is exactly one weight per array.
    pub fn validate_weight_count(arrays: usize, weights: usize) -> Result<(), AverageError> {
        if arrays != weights {
            return Err(AverageError::MismatchedWeights { arrays, weights });
        }
        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate that weights are finite and non-negative.
    pub fn validate_weights(weights: &[f64]) -> Result<(), AverageError> {
        for (index, &value) in weights.iter().enumerate() {
            if !value.is_finite() || value < 0.0 {
                return Err(AverageError::InvalidWeight { index, value });
            }
        }
        Ok(())
    }

    /// Validate that block sizes are finite and non-negative.
    pub fn validate_block_sizes(sizes: &[f64]) -> Result<(), AverageError> {
        for (index, &value) in sizes.iter().enumerate() {
            if !value.is_finite() || value < 0.0 {
                return Err(AverageError::InvalidBlockSize { index, value });
            }
        }
        Ok(())
    }

    /// Validate variable-weight bounds: finite with `0 <= lower < upper`,
    /// or both zero.
    pub fn validate_bounds(lower: f64, upper: f64) -> Result<(), AverageError> {
        let ordered = upper > lower || (lower == 0.0 && upper == 0.0);
        if !lower.is_finite() || !upper.is_finite() || lower < 0.0 || !ordered {
            return Err(AverageError::InvalidBounds { lower, upper });
        }
        Ok(())
    }

    // ========================================================================
    // Builder Validation
    // ========================================================================

    /// Validate that explicit weights and block sizes are not both set.
    pub fn validate_weight_source(
        has_weights: bool,
        has_block_sizes: bool,
    ) -> Result<(), AverageError> {
        if has_weights && has_block_sizes {
            return Err(AverageError::ConflictingWeights);
        }
        Ok(())
    }

    /// Validate that no parameter was set multiple times.
    pub fn validate_no_duplicates(duplicate_param: Option<&'static str>) -> Result<(), AverageError> {
        if let Some(param) = duplicate_param {
            return Err(AverageError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
