//! Tests for block weight computation.
//!
//! ## Test Organization
//!
//! 1. **Variable Weights** - Linear ramp between bounds
//! 2. **Policies** - None, Equal, Variable over a list of sizes

use approx::assert_relative_eq;

use average_vectors::{
    compute_block_weights, compute_variable, VariableWeightParameters, WeightPolicy,
};

// ============================================================================
// Variable Weight Tests
// ============================================================================

/// Test degenerate bounds where lower == upper == 0.
#[test]
fn test_variable_zero_bounds() {
    let params = VariableWeightParameters::new(0.0, 0.0);
    assert_eq!(compute_variable(0.0, &params), 0.0);
    assert_eq!(compute_variable(1.0, &params), 1.0);
}

/// Test the ramp between bounds.
#[test]
fn test_variable_ramp() {
    let params = VariableWeightParameters::new(5.0, 10.0);

    assert_eq!(compute_variable(0.0, &params), 0.0);
    assert_eq!(compute_variable(4.0, &params), 0.0);
    assert_eq!(compute_variable(5.0, &params), 0.0);
    assert_relative_eq!(compute_variable(6.0, &params), 0.2);
    assert_relative_eq!(compute_variable(7.5, &params), 0.5);
    assert_eq!(compute_variable(10.0, &params), 1.0);
    assert_eq!(compute_variable(15.0, &params), 1.0);
}

/// Test that an empty block has zero weight even when below no bound.
#[test]
fn test_variable_empty_block() {
    let params = VariableWeightParameters::default();
    assert_eq!(params.lower_bound, 0.0);
    assert_eq!(params.upper_bound, 1000.0);
    assert_eq!(compute_variable(0.0, &params), 0.0);
    assert_relative_eq!(compute_variable(250.0, &params), 0.25);
    assert_eq!(compute_variable(5000.0, &params), 1.0);
}

// ============================================================================
// Policy Tests
// ============================================================================

/// Test the equal policy.
#[test]
fn test_policy_equal() {
    let sizes = [0, 10, 100, 1000];
    let weights = compute_block_weights(&sizes, WeightPolicy::Equal, &Default::default());
    assert_eq!(weights, vec![0.0, 1.0, 1.0, 1.0]);
}

/// Test the none policy: weights are the sizes.
#[test]
fn test_policy_none() {
    let sizes = [0, 10, 100, 1000];
    let weights = compute_block_weights(&sizes, WeightPolicy::None, &Default::default());
    assert_eq!(weights, vec![0.0, 10.0, 100.0, 1000.0]);
}

/// Test the variable policy against the scalar function.
#[test]
fn test_policy_variable() {
    let sizes = [0usize, 10, 100, 1000];
    let params = VariableWeightParameters::new(20.0, 200.0);

    let weights = compute_block_weights(&sizes, WeightPolicy::Variable, &params);
    let expected: Vec<f64> = sizes
        .iter()
        .map(|&s| compute_variable(s as f64, &params))
        .collect();

    assert_eq!(weights, expected);
    assert_eq!(weights, vec![0.0, 0.0, 80.0 / 180.0, 1.0]);
}

/// Test that Variable is the default policy.
#[test]
fn test_policy_default() {
    assert_eq!(WeightPolicy::default(), WeightPolicy::Variable);
}

/// Test floating-point block sizes.
#[test]
fn test_policy_float_sizes() {
    let sizes = [0.0, 0.5, 2.0];
    let weights = compute_block_weights(&sizes, WeightPolicy::Equal, &Default::default());
    assert_eq!(weights, vec![0.0, 1.0, 1.0]);
}
