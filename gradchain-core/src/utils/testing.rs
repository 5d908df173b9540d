use crate::payload::{Numeric, Payload};

/// Checks that a payload has the expected shape and is elementwise within `tolerance` of
/// `expected_data`.
/// Panics if shapes differ or data differs significantly.
pub fn check_payload_near<P: Payload>(
    actual: &P,
    expected_shape: &[usize],
    expected_data: &[f64],
    tolerance: f64,
) {
    assert_eq!(actual.shape(), expected_shape, "Shape mismatch");

    let actual_data: Vec<f64> = actual.to_vec().into_iter().map(Numeric::as_f64).collect();
    assert_eq!(
        actual_data.len(),
        expected_data.len(),
        "Data length mismatch"
    );

    for (i, (a, e)) in actual_data.iter().zip(expected_data.iter()).enumerate() {
        let diff = (a - e).abs();
        if diff > tolerance {
            panic!(
                "Data mismatch at index {}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
                i, a, e, diff, tolerance
            );
        }
    }
}
