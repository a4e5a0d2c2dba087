//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the element-wise numeric passes used by the
//! averaging kernel, with SIMD backends for `f32` and `f64`.
//!
//! These are reusable building blocks with no averaging-specific logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Vectorized scale and divide passes.
pub mod accumulate;
