//! # average-vectors — Element-wise averages of parallel arrays
//!
//! Average parallel elements across a collection of equal-length numeric
//! arrays, optionally weighting each array and optionally ignoring NaN
//! values per position.
//!
//! A typical use is summarising per-block statistics: a statistic is
//! computed for every feature separately within each block (batch, group)
//! of observations, and the per-block vectors are then averaged into a
//! single vector, with larger blocks counting for more.
//!
//! ## Quick Start
//!
//! ### Unchecked entry points
//!
//! ```rust
//! use average_vectors::prelude::*;
//!
//! let a = [1.0, f64::NAN];
//! let b = [3.0, f64::NAN];
//! let c = [5.0, 4.0];
//!
//! // Allocate the output; NaN-aware.
//! let avg: Vec<f64> = compute(2, &[&a[..], &b[..], &c[..]], true);
//! assert_eq!(avg, vec![3.0, 4.0]);
//!
//! // Weighted, writing into an existing buffer.
//! let mut out = [0.0f64; 2];
//! compute_weighted_into(&[&a[..], &c[..]], &[1.0, 3.0], &mut out, false);
//! assert_eq!(out[0], 4.0);
//! assert!(out[1].is_nan());
//! ```
//!
//! ### Checked model
//!
//! ```rust
//! use average_vectors::prelude::*;
//!
//! let x = [2.0, 4.0, 6.0];
//! let y = [4.0, 8.0, 12.0];
//!
//! let model = Average::new()
//!     .block_sizes(&[10usize, 2000])   // cells per block
//!     .weight_policy(Variable)         // down-weight small blocks
//!     .variable_bounds(0.0, 1000.0)
//!     .build()?;
//!
//! let avg: Vec<f64> = model.compute(3, &[&x[..], &y[..]])?;
//! assert_eq!(model.weights(), Some(&[0.01, 1.0][..]));
//! assert!((avg[0] - (2.0 * 0.01 + 4.0) / 1.01).abs() < 1e-12);
//! # Result::<(), AverageError>::Ok(())
//! ```
//!
//! ## Semantics
//!
//! | Input                                  | Output                                   |
//! |----------------------------------------|------------------------------------------|
//! | no arrays                              | all NaN                                  |
//! | one array (unweighted)                 | copy of that array                       |
//! | one array, weight 0                    | all NaN                                  |
//! | one array, weight > 0                  | copy of that array                       |
//! | all weights exactly equal and non-zero | unweighted average                       |
//! | all weights zero                       | all NaN                                  |
//! | `skip_nan = false`                     | NaN anywhere in a column gives NaN       |
//! | `skip_nan = true`                      | NaN entries drop out of sum and divisor  |
//!
//! With `skip_nan`, a position where every contributor is NaN (or every
//! non-NaN contributor has zero weight) divides zero by zero and yields NaN.
//!
//! Weight comparisons (`== 0`, `== 1`, all equal) use exact floating-point
//! equality. Weights that differ in the last bit take the general weighted
//! path; results then differ from the unweighted average only by rounding.
//!
//! ## Preconditions
//!
//! The functions in [`prelude`] that do not return `Result` trust their
//! inputs: every array must hold at least `n` elements and there must be
//! one non-negative, finite weight per array. Violations panic on slice
//! indexing or produce meaningless numbers. Use [`prelude::Average`] for
//! validated inputs.
//!
//! ## Minimal Usage (no_std)
//!
//! ```toml
//! [dependencies]
//! average-vectors = { version = "0.1", default-features = false }
//! ```
//!
//! ## Logging
//!
//! Path decisions are reported through the [`log`](https://docs.rs/log)
//! facade at `trace` level, block weight derivation at `debug` level.
//! Install any logger to see them.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - error type and scratch buffers.
mod primitives;

// Layer 2: Math - SIMD scale and divide passes.
mod math;

// Layer 3: Algorithms - averaging kernel and block weights.
mod algorithms;

// Layer 4: Engine - unchecked entry points, dispatch and validation.
mod engine;

// High-level fluent API.
mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Standard prelude.
///
/// ```
/// use average_vectors::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        compute, compute_block_weights, compute_into, compute_into_with_buffer, compute_variable,
        compute_weighted, compute_weighted_into, compute_weighted_into_with_buffer,
        AverageBuffer, AverageBuilder as Average, AverageError, AverageVectors, FloatAccumulate,
        VariableWeightParameters,
        WeightPolicy::{self, Equal, Variable},
    };
}

pub use api::{
    compute, compute_block_weights, compute_into, compute_into_with_buffer, compute_variable,
    compute_weighted, compute_weighted_into, compute_weighted_into_with_buffer, AverageBuffer,
    AverageBuilder, AverageError, AverageVectors, FloatAccumulate, VariableWeightParameters,
    WeightPolicy,
};

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing purposes.
/// It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change without notice.
/// Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types and utilities.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal core algorithms.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal execution engine.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
