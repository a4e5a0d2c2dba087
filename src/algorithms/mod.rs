//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer holds the averaging kernel and the block-weight calculation
//! that feeds its weighted variant.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Element-wise (weighted) averaging kernel.
pub mod average;

/// Block weights from block sizes.
pub mod block_weights;
