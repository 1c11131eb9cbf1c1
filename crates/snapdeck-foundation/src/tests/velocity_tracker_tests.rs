use super::*;

#[test]
fn empty_tracker_returns_zero() {
    let tracker = VelocityTracker1D::new();
    assert_eq!(tracker.calculate_velocity(), 0.0);
}

#[test]
fn single_point_returns_zero() {
    let mut tracker = VelocityTracker1D::new();
    tracker.add_data_point(0, 100.0);
    assert_eq!(tracker.calculate_velocity(), 0.0);
}

#[test]
fn constant_velocity() {
    let mut tracker = VelocityTracker1D::new();
    // 100 px per 10 ms
    tracker.add_data_point(0, 0.0);
    tracker.add_data_point(10, 100.0);
    tracker.add_data_point(20, 200.0);
    tracker.add_data_point(30, 300.0);

    let velocity = tracker.calculate_velocity();
    assert!(
        (velocity - 10000.0).abs() < 1000.0,
        "Expected ~10000, got {}",
        velocity
    );
}

#[test]
fn negative_velocity() {
    let mut tracker = VelocityTracker1D::new();
    tracker.add_data_point(0, 300.0);
    tracker.add_data_point(10, 200.0);
    tracker.add_data_point(20, 100.0);

    let velocity = tracker.calculate_velocity();
    assert!(velocity < 0.0, "Expected negative velocity, got {}", velocity);
}

#[test]
fn reset_clears_history() {
    let mut tracker = VelocityTracker1D::new();
    tracker.add_data_point(0, 0.0);
    tracker.add_data_point(10, 100.0);
    tracker.reset();
    assert_eq!(tracker.calculate_velocity(), 0.0);
}

#[test]
fn velocity_capped() {
    let mut tracker = VelocityTracker1D::new();
    tracker.add_data_point(0, 0.0);
    tracker.add_data_point(1, 10_000.0);
    assert_eq!(tracker.calculate_velocity_with_max(8_000.0), 8_000.0);

    tracker.reset();
    tracker.add_data_point(0, 10_000.0);
    tracker.add_data_point(1, 0.0);
    assert_eq!(tracker.calculate_velocity_with_max(8_000.0), -8_000.0);
}

#[test]
fn samples_outside_horizon_are_ignored() {
    let mut tracker = VelocityTracker1D::new();
    tracker.add_data_point(0, 5_000.0);
    tracker.add_data_point(150, 100.0);
    tracker.add_data_point(160, 200.0);
    tracker.add_data_point(170, 300.0);

    let velocity = tracker.calculate_velocity();
    assert!(velocity > 0.0, "old sample should not flip the sign, got {velocity}");
}

#[test]
fn gap_over_stopped_threshold_returns_zero() {
    let mut tracker = VelocityTracker1D::new();
    tracker.add_data_point(0, 0.0);
    tracker.add_data_point(ASSUME_STOPPED_MS + 1, 100.0);
    assert_eq!(tracker.calculate_velocity(), 0.0);
}

#[test]
fn slow_drag_has_low_velocity() {
    let mut tracker = VelocityTracker1D::new();
    for step in 0..10 {
        tracker.add_data_point(step * 16, step as f32 * 0.8);
    }
    let velocity = tracker.calculate_velocity();
    assert!(velocity > 0.0 && velocity < 100.0, "got {velocity}");
}

#[test]
fn two_dimensional_tracker_reports_each_axis() {
    let mut tracker = VelocityTracker::new();
    for step in 0..5u64 {
        let t = step * 10;
        tracker.add_position(t, Point::new(step as f32 * 20.0, step as f32 * -5.0));
    }
    let velocity = tracker.calculate_velocity();
    assert!((velocity.x - 2000.0).abs() < 200.0, "x {}", velocity.x);
    assert!((velocity.y + 500.0).abs() < 50.0, "y {}", velocity.y);
    assert!(velocity.magnitude() > velocity.x.abs());
}

#[test]
fn two_dimensional_tracker_caps_at_max_fling_velocity() {
    let mut tracker = VelocityTracker::new();
    tracker.add_position(0, Point::new(0.0, 0.0));
    tracker.add_position(1, Point::new(50_000.0, 0.0));
    let velocity = tracker.calculate_velocity();
    assert_eq!(velocity.x, MAX_FLING_VELOCITY);
    assert_eq!(velocity.y, 0.0);
}
