//! Element-wise averaging kernel.
//!
//! ## Purpose
//!
//! This module implements the shared inner engine behind the unweighted and
//! weighted entry points: it sums parallel elements across a collection of
//! arrays and normalizes the sum, optionally skipping NaN elements.
//!
//! ## Design notes
//!
//! * **Compile-time dispatch**: `WEIGHTED` selects the weighted code path;
//!   the unweighted instantiation never reads the weight slice.
//! * **Exact comparisons**: weight `== 0` and `== 1` are tested with exact
//!   equality. A weight that is merely close to one is multiplied through.
//! * **Conversion**: inputs and weights are converted to the output type
//!   with `as` semantics (`AsPrimitive`), so the single-array copy of an
//!   `f64` input into an `f64` output is bit-identical.
//!
//! ## Key concepts
//!
//! * **Mass**: the per-position divisor in NaN-skipping mode. It counts the
//!   non-NaN contributors (unweighted) or sums their weights (weighted).
//! * **Global divisor**: without NaN skipping, every position is multiplied
//!   by the reciprocal of the array count or of the weight total. Both are
//!   formed in `f64` and converted once.
//!
//! ## Invariants
//!
//! * Every element of `out` is overwritten.
//! * Zero-weight arrays contribute neither to the sum nor to the mass.
//! * A position with zero mass divides by zero (NaN or `±inf`); this is not
//!   guarded.
//!
//! ## Non-goals
//!
//! * This module does not validate lengths, weights or finiteness.
//! * This module does not detect equal weights (handled by the engine).

// External dependencies
use num_traits::{AsPrimitive, Num};

// Internal dependencies
use crate::math::accumulate::FloatAccumulate;
use crate::primitives::buffer::AverageBuffer;

// ============================================================================
// Kernel
// ============================================================================

/// Average parallel elements of `arrays` into `out`.
///
/// The vector length is `out.len()`; every array must hold at least that
/// many elements and, when `WEIGHTED`, `weights` must hold one entry per
/// array. `buffer` is only touched when `skip_nan` is set.
pub fn average<const WEIGHTED: bool, S, W, O>(
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
    let n = out.len();

    match arrays {
        [] => {
            out.fill(O::nan());
            return;
        }
        [only] => {
            if WEIGHTED && weights[0] == W::zero() {
                out.fill(O::nan());
            } else {
                copy_converted(&only[..n], out);
            }
            return;
        }
        _ => {}
    }

    out.fill(O::zero());
    let mass: &mut [O] = if skip_nan {
        buffer.reset_mass(n)
    } else {
        &mut []
    };

    for (idx, &src) in arrays.iter().enumerate() {
        let src = &src[..n];

        if WEIGHTED {
            let weight = weights[idx];
            if weight == W::zero() {
                continue;
            }

            // Unit weights fall through to the plain loop.
            if weight != W::one() {
                let weight: O = weight.as_();
                if skip_nan {
                    add_scaled_skip_nan(src, weight, out, mass);
                } else {
                    add_scaled(src, weight, out);
                }
                continue;
            }
        }

        if skip_nan {
            add_plain_skip_nan(src, out, mass);
        } else {
            add_plain(src, out);
        }
    }

    if skip_nan {
        O::divide_in_place(out, mass);
    } else {
        let total: f64 = if WEIGHTED {
            weights[..arrays.len()]
                .iter()
                .map(|&w| -> f64 { w.as_() })
                .sum()
        } else {
            arrays.len() as f64
        };
        O::scale_in_place(out, O::from_f64(1.0 / total));
    }
}

// ============================================================================
// Accumulation Loops
// ============================================================================

#[inline]
fn copy_converted<S: AsPrimitive<O>, O: Copy + 'static>(src: &[S], out: &mut [O]) {
    for (o, &x) in out.iter_mut().zip(src) {
        *o = x.as_();
    }
}

#[inline]
fn add_plain<S: AsPrimitive<O>, O: FloatAccumulate>(src: &[S], out: &mut [O]) {
    for (o, &x) in out.iter_mut().zip(src) {
        let x: O = x.as_();
        *o = *o + x;
    }
}

#[inline]
fn add_plain_skip_nan<S: AsPrimitive<O>, O: FloatAccumulate>(
    src: &[S],
    out: &mut [O],
    mass: &mut [O],
) {
    for ((o, m), &x) in out.iter_mut().zip(mass.iter_mut()).zip(src) {
        let x: O = x.as_();
        if !x.is_nan() {
            *o = *o + x;
            *m = *m + O::one();
        }
    }
}

#[inline]
fn add_scaled<S: AsPrimitive<O>, O: FloatAccumulate>(src: &[S], weight: O, out: &mut [O]) {
    for (o, &x) in out.iter_mut().zip(src) {
        let x: O = x.as_();
        *o = *o + x * weight;
    }
}

#[inline]
fn add_scaled_skip_nan<S: AsPrimitive<O>, O: FloatAccumulate>(
    src: &[S],
    weight: O,
    out: &mut [O],
    mass: &mut [O],
) {
    for ((o, m), &x) in out.iter_mut().zip(mass.iter_mut()).zip(src) {
        let x: O = x.as_();
        let x = x * weight;
        if !x.is_nan() {
            *o = *o + x;
            *m = *m + weight;
        }
    }
}
