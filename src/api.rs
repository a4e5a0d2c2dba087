//! High-level API for averaging parallel arrays.
//!
//! ## Purpose
//!
//! This module provides the checked, user-facing entry point. A fluent
//! builder collects the averaging configuration (NaN skipping, explicit
//! weights or block sizes with a weighting policy) and produces an
//! [`AverageVectors`] model that validates its inputs before dispatching
//! to the engine.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Every parameter is optional; the default is an
//!   unweighted average that propagates NaN.
//! * **Validated**: Configuration is validated in `build()`, input shapes
//!   in every `compute*` call.
//! * **Type-Safe**: Generic over input statistic and `Float` output types.
//!
//! ### Configuration Flow
//!
//! 1. Create an [`AverageBuilder`] via `Average::new()`.
//! 2. Chain configuration methods (`.skip_nan()`, `.weights()`, ...).
//! 3. Call `.build()` and use the model's `compute` methods.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use log::debug;
use num_traits::AsPrimitive;

// Internal dependencies
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::algorithms::block_weights::{
    compute_block_weights, compute_variable, VariableWeightParameters, WeightPolicy,
};
pub use crate::engine::executor::{
    compute, compute_into, compute_into_with_buffer, compute_weighted, compute_weighted_into,
    compute_weighted_into_with_buffer,
};
pub use crate::math::accumulate::FloatAccumulate;
pub use crate::primitives::buffer::AverageBuffer;
pub use crate::primitives::errors::AverageError;

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring an element-wise average.
#[derive(Debug, Clone, Default)]
pub struct AverageBuilder {
    /// Ignore NaN elements per position (default: false).
    pub skip_nan: Option<bool>,

    /// Explicit per-array weights.
    pub weights: Option<Vec<f64>>,

    /// Per-array block sizes, turned into weights by `weight_policy`.
    pub block_sizes: Option<Vec<f64>>,

    /// Policy for deriving weights from block sizes (default: Variable).
    pub weight_policy: Option<WeightPolicy>,

    /// Bounds for the variable policy (default: 0 and 1000).
    pub variable_bounds: Option<VariableWeightParameters>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl AverageBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            skip_nan: None,
            weights: None,
            block_sizes: None,
            weight_policy: None,
            variable_bounds: None,
            duplicate_param: None,
        }
    }

    /// Ignore NaN elements, dividing each position by its own count
    /// (or accumulated weight) of non-NaN contributors.
    pub fn skip_nan(mut self) -> Self {
        if self.skip_nan.is_some() {
            self.duplicate_param = Some("skip_nan");
        }
        self.skip_nan = Some(true);
        self
    }

    /// Use explicit weights, one per array.
    pub fn weights(mut self, weights: &[f64]) -> Self {
        if self.weights.is_some() {
            self.duplicate_param = Some("weights");
        }
        self.weights = Some(weights.to_vec());
        self
    }

    /// Derive weights from the size of each array's block.
    pub fn block_sizes<S: AsPrimitive<f64>>(mut self, sizes: &[S]) -> Self {
        if self.block_sizes.is_some() {
            self.duplicate_param = Some("block_sizes");
        }
        self.block_sizes = Some(sizes.iter().map(|&s| s.as_()).collect());
        self
    }

    /// Set the policy that turns block sizes into weights.
    pub fn weight_policy(mut self, policy: WeightPolicy) -> Self {
        if self.weight_policy.is_some() {
            self.duplicate_param = Some("weight_policy");
        }
        self.weight_policy = Some(policy);
        self
    }

    /// Set the bounds of the variable weighting policy.
    pub fn variable_bounds(mut self, lower: f64, upper: f64) -> Self {
        if self.variable_bounds.is_some() {
            self.duplicate_param = Some("variable_bounds");
        }
        self.variable_bounds = Some(VariableWeightParameters::new(lower, upper));
        self
    }

    /// Validate the configuration and build the model.
    ///
    /// `weight_policy` and `variable_bounds` only take effect together
    /// with `block_sizes`.
    pub fn build(self) -> Result<AverageVectors, AverageError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;
        Validator::validate_weight_source(self.weights.is_some(), self.block_sizes.is_some())?;

        let weights = match (self.weights, self.block_sizes) {
            (Some(weights), _) => {
                Validator::validate_weights(&weights)?;
                Some(weights)
            }
            (None, Some(sizes)) => {
                Validator::validate_block_sizes(&sizes)?;
                let params = self.variable_bounds.unwrap_or_default();
                Validator::validate_bounds(params.lower_bound, params.upper_bound)?;
                let policy = self.weight_policy.unwrap_or_default();
                debug!("deriving {} block weights with {:?}", sizes.len(), policy);
                Some(compute_block_weights(&sizes, policy, &params))
            }
            (None, None) => None,
        };

        Ok(AverageVectors {
            skip_nan: self.skip_nan.unwrap_or(false),
            weights,
        })
    }
}

// ============================================================================
// Model
// ============================================================================

/// A validated averaging configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct AverageVectors {
    skip_nan: bool,
    weights: Option<Vec<f64>>,
}

impl AverageVectors {
    /// Whether NaN elements are skipped.
    pub fn skip_nan(&self) -> bool {
        self.skip_nan
    }

    /// Resolved per-array weights, if the average is weighted.
    pub fn weights(&self) -> Option<&[f64]> {
        self.weights.as_deref()
    }

    /// Average `arrays` of length `n` into a newly allocated vector.
    pub fn compute<O, S>(&self, n: usize, arrays: &[&[S]]) -> Result<Vec<O>, AverageError>
    where
        S: AsPrimitive<O>,
        O: FloatAccumulate,
        f64: AsPrimitive<O>,
    {
        let mut out = vec![O::zero(); n];
        self.compute_into(arrays, &mut out)?;
        Ok(out)
    }

    /// Average `arrays` into `out`; the vector length is `out.len()`.
    pub fn compute_into<S, O>(&self, arrays: &[&[S]], out: &mut [O]) -> Result<(), AverageError>
    where
        S: AsPrimitive<O>,
        O: FloatAccumulate,
        f64: AsPrimitive<O>,
    {
        let mut buffer = AverageBuffer::default();
        self.compute_into_with_buffer(arrays, out, &mut buffer)
    }

    /// [`AverageVectors::compute_into`] with a reusable scratch buffer.
    pub fn compute_into_with_buffer<S, O>(
        &self,
        arrays: &[&[S]],
        out: &mut [O],
        buffer: &mut AverageBuffer<O>,
    ) -> Result<(), AverageError>
    where
        S: AsPrimitive<O>,
        O: FloatAccumulate,
        f64: AsPrimitive<O>,
    {
        Validator::validate_arrays(arrays, out.len())?;

        match &self.weights {
            Some(weights) => {
                Validator::validate_weight_count(arrays.len(), weights.len())?;
                compute_weighted_into_with_buffer(
                    arrays,
                    weights.as_slice(),
                    out,
                    self.skip_nan,
                    buffer,
                );
            }
            None => compute_into_with_buffer(arrays, out, self.skip_nan, buffer),
        }
        Ok(())
    }
}
