//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer exposes the unchecked averaging entry points, chooses the
//! kernel path for each call, and validates inputs for the checked API.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Entry points and path dispatch.
pub mod executor;

/// Validation utilities.
pub mod validator;
