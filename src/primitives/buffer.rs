//! Scratch space for the NaN-aware averaging pass.
//!
//! ## Purpose
//!
//! When NaN skipping is requested, every output position needs its own
//! divisor (a count of non-NaN contributors, or their accumulated weight).
//! This module holds that per-position "mass" buffer so callers averaging
//! many collections in a loop can recycle one allocation.
//!
//! ## Design notes
//!
//! * **Lazy Expansion**: Buffers grow on demand via `ensure_capacity` but
//!   never shrink.
//! * **Logical reset**: Between calls the buffer is cleared and refilled
//!   with zeros; capacity is kept.
//! * **Explicit ownership**: One buffer per thread, passed in by the caller.
//!
//! ## Invariants
//!
//! * After `AverageBuffer::reset_mass(n)` the mass slot holds exactly `n` zeros.
//!
//! ## Non-goals
//!
//! * Thread-local automatic caching.
//! * Shrinking or releasing memory between calls.

// Feature-gated dependencies
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::ops::{Deref, DerefMut};
use num_traits::Zero;

// ============================================================================
// Slot - Unified Vector Abstraction
// ============================================================================

/// A reusable vector slot with automatic capacity management.
#[derive(Debug, Clone)]
pub struct Slot<T>(Vec<T>);

impl<T> Slot<T> {
    /// Create a new slot with the given initial capacity.
    #[inline]
    pub fn new(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    /// Ensure the slot has at least the given capacity.
    /// Grows the underlying vector if needed; never shrinks.
    #[inline]
    pub fn ensure_capacity(&mut self, capacity: usize) {
        if self.0.capacity() < capacity {
            self.0.reserve(capacity - self.0.len());
        }
    }
}

impl<T: Clone> Slot<T> {
    /// Replace the contents with `len` copies of `value`.
    #[inline]
    pub fn fill(&mut self, len: usize, value: T) -> &mut [T] {
        self.0.clear();
        self.0.resize(len, value);
        &mut self.0
    }
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<T> Deref for Slot<T> {
    type Target = Vec<T>;
    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for Slot<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

// ============================================================================
// Main Workspace
// ============================================================================

/// Reusable buffers for averaging operations.
#[derive(Debug, Clone)]
pub struct AverageBuffer<T> {
    /// Per-position count or accumulated weight of non-NaN contributors.
    pub mass: Slot<T>,
}

impl<T> AverageBuffer<T> {
    /// Create a buffer pre-sized for vectors of length `n`.
    pub fn new(n: usize) -> Self {
        Self { mass: Slot::new(n) }
    }

    /// Ensure the buffer can hold vectors of length `n` without reallocating.
    pub fn ensure_capacity(&mut self, n: usize) {
        self.mass.ensure_capacity(n);
    }
}

impl<T> Default for AverageBuffer<T> {
    fn default() -> Self {
        Self {
            mass: Slot::default(),
        }
    }
}

impl<T: Zero + Clone> AverageBuffer<T> {
    /// Reset the mass slot to `n` zeros and return it.
    #[inline]
    pub fn reset_mass(&mut self, n: usize) -> &mut [T] {
        self.mass.fill(n, T::zero())
    }
}
