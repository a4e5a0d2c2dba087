//! Tests for the reusable averaging buffer.

use average_vectors::AverageBuffer;

/// Test that resetting yields exactly `n` zeros.
#[test]
fn test_reset_mass_zeroes() {
    let mut buffer = AverageBuffer::<f64>::new(4);

    let mass = buffer.reset_mass(4);
    assert_eq!(mass, &[0.0; 4][..]);
    mass[2] = 7.0;

    let mass = buffer.reset_mass(2);
    assert_eq!(mass, &[0.0; 2][..]);
    assert_eq!(buffer.mass.len(), 2);
}

/// Test that capacity grows but never shrinks.
#[test]
fn test_capacity_is_monotonic() {
    let mut buffer = AverageBuffer::<f32>::default();
    assert_eq!(buffer.mass.capacity(), 0);

    buffer.ensure_capacity(64);
    let cap = buffer.mass.capacity();
    assert!(cap >= 64);

    buffer.reset_mass(8);
    buffer.ensure_capacity(16);
    assert_eq!(buffer.mass.capacity(), cap);

    buffer.reset_mass(128);
    assert!(buffer.mass.capacity() >= 128);
    assert_eq!(buffer.mass.len(), 128);
}
