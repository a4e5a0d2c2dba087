use average_vectors::AverageError;

#[test]
fn test_average_error_display() {
    // MismatchedWeights
    let err = AverageError::MismatchedWeights {
        arrays: 3,
        weights: 2,
    };
    assert_eq!(
        format!("{}", err),
        "Length mismatch: 3 arrays but 2 weights"
    );

    // ArrayTooShort
    let err = AverageError::ArrayTooShort {
        index: 1,
        len: 4,
        n: 10,
    };
    assert_eq!(
        format!("{}", err),
        "Array 1 has 4 elements, need at least 10"
    );

    // InvalidWeight
    let err = AverageError::InvalidWeight {
        index: 2,
        value: -1.5,
    };
    assert_eq!(
        format!("{}", err),
        "Invalid weight: weights[2]=-1.5 (must be finite and >= 0)"
    );

    // InvalidBlockSize
    let err = AverageError::InvalidBlockSize {
        index: 0,
        value: f64::NAN,
    };
    assert_eq!(
        format!("{}", err),
        "Invalid block size: sizes[0]=NaN (must be finite and >= 0)"
    );

    // InvalidBounds
    let err = AverageError::InvalidBounds {
        lower: 10.0,
        upper: 5.0,
    };
    assert_eq!(
        format!("{}", err),
        "Invalid bounds: lower=10, upper=5 (must be finite with 0 <= lower < upper, or both 0)"
    );

    // ConflictingWeights
    let err = AverageError::ConflictingWeights;
    assert_eq!(
        format!("{}", err),
        "Explicit weights and block sizes cannot both be set"
    );

    // DuplicateParameter
    let err = AverageError::DuplicateParameter {
        parameter: "weights",
    };
    assert_eq!(
        format!("{}", err),
        "Parameter 'weights' was set multiple times. Each parameter can only be configured once."
    );
}

#[test]
fn test_average_error_is_std_error() {
    fn assert_error<E: std::error::Error>(_: &E) {}
    assert_error(&AverageError::ConflictingWeights);
}
