/// Float comparison shared by the geometry tests.
pub fn assert_close(actual: f64, expected: f64) {
    let diff = (actual - expected).abs();
    assert!(
        diff < 1e-9,
        "expected {expected}, got {actual}, diff {diff}"
    );
}
