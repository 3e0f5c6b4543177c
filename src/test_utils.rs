/// Assert that `result` agrees with `expected` to the given relative error.
/// NaN and infinities must match exactly; an expected value of zero only
/// checks that `result` is zero.
pub(crate) fn test_rel(result: f64, expected: f64, relative_error: f64) {
    let status: i32 = if result.is_nan() || expected.is_nan() {
        if result.is_nan() != expected.is_nan() {
            1
        } else {
            0
        }
    } else if result.is_infinite() || expected.is_infinite() {
        if result.is_infinite() != expected.is_infinite() {
            1
        } else {
            0
        }
    } else if (expected > 0.0 && expected < f64::MIN_POSITIVE)
        || (expected < 0.0 && expected > -(f64::MIN_POSITIVE))
    {
        -1
    } else if expected != 0.0 {
        if (result - expected).abs() / expected.abs() > relative_error {
            1
        } else {
            0
        }
    } else if result != 0.0 {
        1
    } else {
        0
    };

    assert!(status != -1, "[Test uses subnormal value]");
    assert!(
        status == 0,
        "observed: {:?}, expected: {:?}",
        result,
        expected
    );
}

/// Assert that `result` is within `absolute_error` of `expected`.
pub(crate) fn test_abs(result: f64, expected: f64, absolute_error: f64) {
    assert!(
        (result - expected).abs() <= absolute_error,
        "observed: {:?}, expected: {:?}, tolerance: {:?}",
        result,
        expected,
        absolute_error
    );
}
