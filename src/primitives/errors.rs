//! Error types for the checked averaging API.
//!
//! ## Purpose
//!
//! This module defines the error conditions reported by the builder and by
//! the checked `AverageVectors` entry points. The low-level engine functions
//! never return errors; their preconditions are the caller's responsibility.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending index and value.
//! * **Deferred**: Builder misuse (duplicates, conflicts) is recorded while
//!   chaining and reported from `build()`.
//! * **No-std**: Only `core::fmt` is needed; `std::error::Error` is
//!   implemented when `std` is enabled.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide recovery or fallback strategies.

// Feature-gated imports
#[cfg(feature = "std")]
use std::error::Error;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for checked averaging operations.
#[derive(Debug, Clone, PartialEq)]
pub enum AverageError {
    /// Number of weights does not match the number of arrays.
    MismatchedWeights {
        /// Number of input arrays.
        arrays: usize,
        /// Number of weights supplied.
        weights: usize,
    },

    /// An input array holds fewer than `n` elements.
    ArrayTooShort {
        /// Position of the array in the collection.
        index: usize,
        /// Length of that array.
        len: usize,
        /// Requested vector length.
        n: usize,
    },

    /// A weight is negative, NaN or infinite.
    InvalidWeight {
        /// Position of the weight.
        index: usize,
        /// Offending value.
        value: f64,
    },

    /// A block size is negative, NaN or infinite.
    InvalidBlockSize {
        /// Position of the block.
        index: usize,
        /// Offending value.
        value: f64,
    },

    /// Variable weight bounds must be finite with `0 <= lower < upper`, or both zero.
    InvalidBounds {
        /// Lower bound provided.
        lower: f64,
        /// Upper bound provided.
        upper: f64,
    },

    /// Explicit weights and block sizes were both configured.
    ConflictingWeights,

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for AverageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::MismatchedWeights { arrays, weights } => {
                write!(f, "Length mismatch: {arrays} arrays but {weights} weights")
            }
            Self::ArrayTooShort { index, len, n } => {
                write!(f, "Array {index} has {len} elements, need at least {n}")
            }
            Self::InvalidWeight { index, value } => {
                write!(
                    f,
                    "Invalid weight: weights[{index}]={value} (must be finite and >= 0)"
                )
            }
            Self::InvalidBlockSize { index, value } => {
                write!(
                    f,
                    "Invalid block size: sizes[{index}]={value} (must be finite and >= 0)"
                )
            }
            Self::InvalidBounds { lower, upper } => {
                write!(
                    f,
                    "Invalid bounds: lower={lower}, upper={upper} (must be finite with 0 <= lower < upper, or both 0)"
                )
            }
            Self::ConflictingWeights => {
                write!(f, "Explicit weights and block sizes cannot both be set")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for AverageError {}
