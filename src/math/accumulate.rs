//! Vectorized normalization passes for the averaging kernel.
//!
//! ## Purpose
//!
//! This module provides a trait-based bridge from generic `Float` output
//! types to SIMD implementations of the two element-wise passes that close
//! every average: scaling by a precomputed reciprocal, and dividing by a
//! per-position mass.
//!
//! ## Design notes
//!
//! * `f64` uses `wide::f64x2` and `f32` uses `wide::f32x4`; the tail that
//!   does not fill a lane group is handled with scalar code.
//! * Lane-wise multiply and divide are plain IEEE-754 operations (no fused
//!   multiply-add), so results are bit-identical to the scalar loop.
//! * Zero divisors are not guarded: `x / 0` yields `±inf` and `0 / 0`
//!   yields NaN.

// External dependencies
use num_traits::{AsPrimitive, Float};
use wide::{f32x4, f64x2};

// ============================================================================
// FloatAccumulate Trait
// ============================================================================

/// Floating-point output type supported by the averaging engine.
pub trait FloatAccumulate: Float + AsPrimitive<Self> + AsPrimitive<f64> + 'static {
    /// Multiply every element of `values` by `factor`.
    fn scale_in_place(values: &mut [Self], factor: Self);

    /// Divide every element of `values` by the matching element of `divisors`.
    ///
    /// `divisors` must be at least as long as `values`.
    fn divide_in_place(values: &mut [Self], divisors: &[Self]);

    /// Convert an `f64` scalar with `as` semantics.
    fn from_f64(value: f64) -> Self;
}

impl FloatAccumulate for f64 {
    #[inline]
    fn from_f64(value: f64) -> Self {
        value
    }

    #[inline]
    fn scale_in_place(values: &mut [Self], factor: Self) {
        let f = f64x2::splat(factor);
        let mut chunks = values.chunks_exact_mut(2);
        for chunk in &mut chunks {
            let v = f64x2::new([chunk[0], chunk[1]]) * f;
            chunk.copy_from_slice(&v.to_array());
        }
        for v in chunks.into_remainder() {
            *v *= factor;
        }
    }

    #[inline]
    fn divide_in_place(values: &mut [Self], divisors: &[Self]) {
        let divisors = &divisors[..values.len()];
        let mut chunks = values.chunks_exact_mut(2);
        let mut denoms = divisors.chunks_exact(2);
        for (chunk, d) in (&mut chunks).zip(&mut denoms) {
            let v = f64x2::new([chunk[0], chunk[1]]) / f64x2::new([d[0], d[1]]);
            chunk.copy_from_slice(&v.to_array());
        }
        for (v, &d) in chunks.into_remainder().iter_mut().zip(denoms.remainder()) {
            *v /= d;
        }
    }
}

impl FloatAccumulate for f32 {
    #[inline]
    fn from_f64(value: f64) -> Self {
        value as f32
    }

    #[inline]
    fn scale_in_place(values: &mut [Self], factor: Self) {
        let f = f32x4::splat(factor);
        let mut chunks = values.chunks_exact_mut(4);
        for chunk in &mut chunks {
            let v = f32x4::new([chunk[0], chunk[1], chunk[2], chunk[3]]) * f;
            chunk.copy_from_slice(&v.to_array());
        }
        for v in chunks.into_remainder() {
            *v *= factor;
        }
    }

    #[inline]
    fn divide_in_place(values: &mut [Self], divisors: &[Self]) {
        let divisors = &divisors[..values.len()];
        let mut chunks = values.chunks_exact_mut(4);
        let mut denoms = divisors.chunks_exact(4);
        for (chunk, d) in (&mut chunks).zip(&mut denoms) {
            let v = f32x4::new([chunk[0], chunk[1], chunk[2], chunk[3]])
                / f32x4::new([d[0], d[1], d[2], d[3]]);
            chunk.copy_from_slice(&v.to_array());
        }
        for (v, &d) in chunks.into_remainder().iter_mut().zip(denoms.remainder()) {
            *v /= d;
        }
    }
}
