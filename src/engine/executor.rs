//! Execution engine for element-wise averaging.
//!
//! ## Purpose
//!
//! This module provides the public unchecked entry points: unweighted and
//! weighted averages, each writing into a caller buffer or allocating the
//! output. It decides which path of the averaging kernel to run.
//!
//! ## Design notes
//!
//! * The weighted entry points detect the degenerate case where every
//!   weight is exactly equal. A shared zero weight yields all-NaN output;
//!   any other shared weight runs the unweighted kernel, which is
//!   mathematically identical and cheaper.
//! * The `*_with_buffer` variants accept a caller-owned [`AverageBuffer`]
//!   so repeated NaN-skipping calls reuse one mass allocation. The plain
//!   variants create a transient buffer that is dropped on return.
//! * Path decisions are logged at `trace` level through the `log` facade.
//!
//! ## Key concepts
//!
//! * **Vector length**: `out.len()` for the `*_into` variants, `n` for the
//!   allocating ones. Every input array must hold at least that many
//!   elements; slicing panics otherwise.
//! * **Exact equality**: the all-weights-equal check uses `==` with no
//!   tolerance. Near-equal weights take the general weighted path.
//!
//! ## Invariants
//!
//! * Every element of the output is written on every call.
//! * No state survives a call except what the caller keeps in its buffer.
//!
//! ## Non-goals
//!
//! * This module does not validate inputs (see `validator` and the `api`
//!   layer for checked entry points).
//! * This module does not parallelize across positions or arrays.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use log::trace;
use num_traits::{AsPrimitive, Num};

// Internal dependencies
use crate::algorithms::average::average;
use crate::math::accumulate::FloatAccumulate;
use crate::primitives::buffer::AverageBuffer;

// ============================================================================
// Unweighted Averages
// ============================================================================

/// Average parallel elements across `arrays` into `out`.
///
/// Each element of `out` is set to the mean of the corresponding elements
/// of all arrays. With `skip_nan`, NaN elements are left out of both the
/// sum and the count of their position.
///
/// * An empty collection fills `out` with NaN.
/// * A single array is copied into `out` without arithmetic.
pub fn compute_into<S, O>(arrays: &[&[S]], out: &mut [O], skip_nan: bool)
where
    S: AsPrimitive<O>,
    O: FloatAccumulate,
{
    let mut buffer = AverageBuffer::default();
    compute_into_with_buffer(arrays, out, skip_nan, &mut buffer);
}

/// [`compute_into`] with a reusable scratch buffer.
pub fn compute_into_with_buffer<S, O>(
    arrays: &[&[S]],
    out: &mut [O],
    skip_nan: bool,
    buffer: &mut AverageBuffer<O>,
) where
    S: AsPrimitive<O>,
    O: FloatAccumulate,
{
    trace!(
        "averaging {} arrays of length {} (skip_nan={})",
        arrays.len(),
        out.len(),
        skip_nan
    );
    average::<false, S, O, O>(arrays, &[], out, skip_nan, buffer);
}

/// Allocate and return the average of `arrays`, each of length `n`.
pub fn compute<O, S>(n: usize, arrays: &[&[S]], skip_nan: bool) -> Vec<O>
where
    S: AsPrimitive<O>,
    O: FloatAccumulate,
{
    let mut out = vec![O::zero(); n];
    compute_into(arrays, &mut out, skip_nan);
    out
}

// ============================================================================
// Weighted Averages
// ============================================================================

/// Weighted average of parallel elements across `arrays` into `out`.
///
/// `weights` holds one non-negative, finite weight per array. With
/// `skip_nan`, a NaN element drops out of its position's sum together with
/// its weight.
///
/// * An empty collection fills `out` with NaN.
/// * If every weight is exactly equal, a shared weight of zero fills `out`
///   with NaN; otherwise the unweighted average is computed.
/// * Zero-weight arrays are ignored.
pub fn compute_weighted_into<S, W, O>(
    arrays: &[&[S]],
    weights: &[W],
    out: &mut [O],
    skip_nan: bool,
) where
    S: AsPrimitive<O>,
    W: Num + AsPrimitive<O> + AsPrimitive<f64>,
    O: FloatAccumulate,
{
    let mut buffer = AverageBuffer::default();
    compute_weighted_into_with_buffer(arrays, weights, out, skip_nan, &mut buffer);
}

/// [`compute_weighted_into`] with a reusable scratch buffer.
pub fn compute_weighted_into_with_buffer<S, W, O>(
    arrays: &[&[S]],
    weights: &[W],
    out: &mut [O],
    skip_nan: bool,
    buffer: &mut AverageBuffer<O>,
) where
    S: AsPrimitive<O>,
    W: Num + AsPrimitive<O> + AsPrimitive<f64>,
    O: FloatAccumulate,
{
    if let Some(shared) = shared_weight(&weights[..arrays.len()]) {
        if shared == W::zero() {
            trace!("all {} weights are zero, output is NaN", arrays.len());
            out.fill(O::nan());
        } else {
            trace!(
                "all {} weights are equal, using unweighted path",
                arrays.len()
            );
            compute_into_with_buffer(arrays, out, skip_nan, buffer);
        }
        return;
    }

    trace!(
        "weighted averaging {} arrays of length {} (skip_nan={})",
        arrays.len(),
        out.len(),
        skip_nan
    );
    average::<true, S, W, O>(arrays, weights, out, skip_nan, buffer);
}

/// Allocate and return the weighted average of `arrays`, each of length `n`.
pub fn compute_weighted<O, S, W>(
    n: usize,
    arrays: &[&[S]],
    weights: &[W],
    skip_nan: bool,
) -> Vec<O>
where
    S: AsPrimitive<O>,
    W: Num + AsPrimitive<O> + AsPrimitive<f64>,
    O: FloatAccumulate,
{
    let mut out = vec![O::zero(); n];
    compute_weighted_into(arrays, weights, &mut out, skip_nan);
    out
}

// ============================================================================
// Helpers
// ============================================================================

/// Return the common weight if every weight is exactly equal.
///
/// `None` for an empty slice.
#[inline]
pub fn shared_weight<W: PartialEq + Copy>(weights: &[W]) -> Option<W> {
    let (&first, rest) = weights.split_first()?;
    rest.iter().all(|&w| w == first).then_some(first)
}
