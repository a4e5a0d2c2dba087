//! Per-block weights derived from block sizes.
//!
//! ## Purpose
//!
//! When statistics are computed separately within each block (batch, group)
//! of observations and then averaged across blocks, each block can be
//! weighted by how many observations it contains. This module turns block
//! sizes into weights for the weighted averaging entry points.
//!
//! ## Key concepts
//!
//! * **None**: the weight is the block size itself, so larger blocks
//!   dominate the average.
//! * **Equal**: every non-empty block gets weight 1, empty blocks get 0.
//! * **Variable**: small blocks are down-weighted linearly between a lower
//!   and an upper bound; all blocks above the upper bound weigh 1.
//!
//! ## Invariants
//!
//! * Returned weights are non-negative whenever sizes and bounds are.
//! * An empty block always receives weight 0 under `Equal` and `Variable`.
//!
//! ## Non-goals
//!
//! * This module does not validate sizes or bounds (see `Validator`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::AsPrimitive;

// ============================================================================
// Policy
// ============================================================================

/// Policy for weighting blocks of different sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WeightPolicy {
    /// Weight each block by its size.
    None,

    /// Down-weight small blocks, weigh large blocks equally.
    #[default]
    Variable,

    /// Weight every non-empty block equally.
    Equal,
}

/// Bounds for [`WeightPolicy::Variable`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VariableWeightParameters {
    /// Blocks smaller than this receive zero weight.
    pub lower_bound: f64,

    /// Blocks larger than this receive unit weight.
    pub upper_bound: f64,
}

impl VariableWeightParameters {
    /// Create parameters with the given bounds.
    pub const fn new(lower_bound: f64, upper_bound: f64) -> Self {
        Self {
            lower_bound,
            upper_bound,
        }
    }
}

impl Default for VariableWeightParameters {
    fn default() -> Self {
        Self::new(0.0, 1000.0)
    }
}

// ============================================================================
// Weight Computation
// ============================================================================

/// Weight of a single block of the given size under the variable policy.
///
/// ```text
/// w(s) = 0                              if s < lower or s == 0
///      = 1                              if s > upper
///      = (s - lower) / (upper - lower)  otherwise
/// ```
#[inline]
pub fn compute_variable(size: f64, params: &VariableWeightParameters) -> f64 {
    if size < params.lower_bound || size == 0.0 {
        return 0.0;
    }

    if size > params.upper_bound {
        return 1.0;
    }

    (size - params.lower_bound) / (params.upper_bound - params.lower_bound)
}

/// Compute one weight per block from the block sizes.
pub fn compute_block_weights<S: AsPrimitive<f64>>(
    sizes: &[S],
    policy: WeightPolicy,
    params: &VariableWeightParameters,
) -> Vec<f64> {
    let sizes = sizes.iter().map(|&s| -> f64 { s.as_() });

    match policy {
        WeightPolicy::None => sizes.collect(),
        WeightPolicy::Equal => sizes.map(|s| if s > 0.0 { 1.0 } else { 0.0 }).collect(),
        WeightPolicy::Variable => sizes.map(|s| compute_variable(s, params)).collect(),
    }
}
