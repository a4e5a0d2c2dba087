#![cfg(feature = "dev")]
//! Tests for input validation.
//!
//! ## Test Organization
//!
//! 1. **Input Validation** - Array lengths and weight counts
//! 2. **Parameter Validation** - Weights, block sizes, bounds
//! 3. **Builder Validation** - Duplicates and conflicting sources

use average_vectors::internals::engine::validator::Validator;
use average_vectors::internals::primitives::errors::AverageError;

// ============================================================================
// Input Validation Tests
// ============================================================================

/// Test array length checks, including NaN data being accepted.
#[test]
fn test_validate_arrays() {
    let a = [1.0, f64::NAN, 3.0];
    let b = [1.0, 2.0];

    assert!(Validator::validate_arrays(&[&a[..]], 3).is_ok());
    assert!(Validator::validate_arrays(&[&a[..], &b[..]], 2).is_ok());
    assert_eq!(
        Validator::validate_arrays(&[&a[..], &b[..]], 3),
        Err(AverageError::ArrayTooShort {
            index: 1,
            len: 2,
            n: 3
        })
    );

    let empty: [&[f64]; 0] = [];
    assert!(Validator::validate_arrays(&empty, 100).is_ok());
}

/// Test weight count checks.
#[test]
fn test_validate_weight_count() {
    assert!(Validator::validate_weight_count(0, 0).is_ok());
    assert!(Validator::validate_weight_count(3, 3).is_ok());
    assert_eq!(
        Validator::validate_weight_count(3, 2),
        Err(AverageError::MismatchedWeights {
            arrays: 3,
            weights: 2
        })
    );
}

// ============================================================================
// Parameter Validation Tests
// ============================================================================

/// Test that zero weights are valid but negative and non-finite ones are not.
#[test]
fn test_validate_weights() {
    assert!(Validator::validate_weights(&[]).is_ok());
    assert!(Validator::validate_weights(&[0.0, 1.0, 1e12]).is_ok());
    assert_eq!(
        Validator::validate_weights(&[0.0, -0.1]),
        Err(AverageError::InvalidWeight {
            index: 1,
            value: -0.1
        })
    );
    assert!(Validator::validate_weights(&[f64::NEG_INFINITY]).is_err());
    assert!(Validator::validate_weights(&[1.0, f64::NAN]).is_err());
}

/// Test block size checks.
#[test]
fn test_validate_block_sizes() {
    assert!(Validator::validate_block_sizes(&[0.0, 10.0]).is_ok());
    assert_eq!(
        Validator::validate_block_sizes(&[f64::INFINITY]),
        Err(AverageError::InvalidBlockSize {
            index: 0,
            value: f64::INFINITY
        })
    );
}

/// Test variable weight bounds.
#[test]
fn test_validate_bounds() {
    assert!(Validator::validate_bounds(0.0, 0.0).is_ok());
    assert!(Validator::validate_bounds(5.0, 10.0).is_ok());
    assert!(Validator::validate_bounds(-1.0, 10.0).is_err());
    assert!(Validator::validate_bounds(10.0, 5.0).is_err());
    assert!(Validator::validate_bounds(5.0, 5.0).is_err());
    assert!(Validator::validate_bounds(0.0, f64::INFINITY).is_err());
    assert!(Validator::validate_bounds(f64::NAN, 1.0).is_err());
}

// ============================================================================
// Builder Validation Tests
// ============================================================================

/// Test weight source conflict detection.
#[test]
fn test_validate_weight_source() {
    assert!(Validator::validate_weight_source(false, false).is_ok());
    assert!(Validator::validate_weight_source(true, false).is_ok());
    assert!(Validator::validate_weight_source(false, true).is_ok());
    assert_eq!(
        Validator::validate_weight_source(true, true),
        Err(AverageError::ConflictingWeights)
    );
}

/// Test duplicate parameter detection.
#[test]
fn test_validate_no_duplicates() {
    assert!(Validator::validate_no_duplicates(None).is_ok());
    assert_eq!(
        Validator::validate_no_duplicates(Some("skip_nan")),
        Err(AverageError::DuplicateParameter {
            parameter: "skip_nan"
        })
    );
}
