//! Assertion helpers for gesture tests.

use snapdeck_ui_graphics::Point;

/// Assert that a value is within `tolerance` of `expected`.
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected {} (±{}), got {} (diff: {})",
        msg,
        expected,
        tolerance,
        actual,
        diff
    );
}

pub fn assert_point_approx_eq(actual: Point, expected: Point, tolerance: f32, msg: &str) {
    assert_approx_eq(actual.x, expected.x, tolerance, &format!("{} - x", msg));
    assert_approx_eq(actual.y, expected.y, tolerance, &format!("{} - y", msg));
}

/// Assert that a sequence of samples never decreases.
pub fn assert_non_decreasing(samples: &[f32], msg: &str) {
    for (i, pair) in samples.windows(2).enumerate() {
        assert!(
            pair[1] >= pair[0],
            "{}: sample {} ({}) is below sample {} ({})",
            msg,
            i + 1,
            pair[1],
            i,
            pair[0]
        );
    }
}

/// Assert that a collection has an expected count.
pub fn assert_count<T>(items: &[T], expected: usize, msg: &str) {
    assert_eq!(
        items.len(),
        expected,
        "{}: expected {} items, got {}",
        msg,
        expected,
        items.len()
    );
}
