use super::*;

use crate::input::PointerEvent;
use snapdeck_ui_graphics::Point;

#[test]
fn saturating_is_monotonic_and_bounded() {
    for k in [320.0f32, 400.0, 500.0] {
        let mut previous = f32::NEG_INFINITY;
        let mut d = -20_000.0f32;
        while d <= 20_000.0 {
            let shown = saturating(d, k);
            assert!(shown >= previous, "not monotonic at {d} for k={k}");
            assert!(shown.abs() < k, "|{shown}| >= {k}");
            previous = shown;
            d += 37.5;
        }
    }
}

#[test]
fn saturating_is_odd_and_fixes_zero() {
    assert_eq!(saturating(0.0, 500.0), 0.0);
    assert_eq!(saturating(120.0, 500.0), -saturating(-120.0, 500.0));
    assert!((saturating(500.0, 500.0) - 250.0).abs() < 1e-4);
}

#[test]
fn saturating_without_constant_is_identity() {
    assert_eq!(saturating(42.0, 0.0), 42.0);
    assert_eq!(saturating(42.0, f32::NAN), 42.0);
}

#[test]
fn rubber_band_shrinks_large_overscroll() {
    assert_eq!(rubber_band(0.0), 0.0);
    let shown = rubber_band(100.0);
    assert!((shown - 100.0f32.powf(0.7) * 0.4).abs() < 1e-4);
    assert!(shown < 100.0);
    assert_eq!(rubber_band(-100.0), -shown);
    assert!(rubber_band(200.0) > shown);
}

#[test]
fn linear_resistance_scales_then_saturates() {
    let linear = DragResistance::linear(0.5);
    assert_eq!(linear.apply(-100.0), -50.0);

    let combined = DragResistance::linear(0.5).with_saturation(Some(400.0));
    assert!((combined.apply(-100.0) - saturating(-50.0, 400.0)).abs() < 1e-5);

    assert_eq!(DragResistance::NONE.apply(-100.0), -100.0);
    assert_eq!(DragResistance::NONE.apply(f32::NAN), 0.0);
}

#[test]
fn distance_past_threshold_commits_in_its_direction() {
    let thresholds = CommitThresholds::symmetric(80.0).with_velocity(Some(300.0));
    assert_eq!(
        decide_commit(-100.0, 0.0, &thresholds),
        CommitDecision::Commit(AxisDirection::Negative)
    );
    assert_eq!(
        decide_commit(80.0, 0.0, &thresholds),
        CommitDecision::Commit(AxisDirection::Positive)
    );
    // Flicked back, but far enough out.
    assert_eq!(
        decide_commit(-100.0, 900.0, &thresholds),
        CommitDecision::Commit(AxisDirection::Negative)
    );
}

#[test]
fn fast_release_commits_in_velocity_direction() {
    let thresholds = CommitThresholds::symmetric(80.0).with_velocity(Some(300.0));
    assert_eq!(
        decide_commit(10.0, -300.0, &thresholds),
        CommitDecision::Commit(AxisDirection::Negative)
    );
    assert_eq!(decide_commit(30.0, 50.0, &thresholds), CommitDecision::SnapBack);
}

#[test]
fn asymmetric_thresholds_follow_the_sign() {
    let thresholds = CommitThresholds::asymmetric(45.0, 60.0);
    assert_eq!(thresholds.distance_for(-1.0), 45.0);
    assert_eq!(thresholds.distance_for(1.0), 60.0);
    assert_eq!(
        decide_commit(-45.0, 0.0, &thresholds),
        CommitDecision::Commit(AxisDirection::Negative)
    );
    assert_eq!(decide_commit(55.0, 0.0, &thresholds), CommitDecision::SnapBack);
    // No velocity threshold configured.
    assert_eq!(decide_commit(10.0, 5_000.0, &thresholds), CommitDecision::SnapBack);
}

#[test]
fn exactly_one_outcome_per_release() {
    let thresholds = CommitThresholds::symmetric(80.0).with_velocity(Some(300.0));
    for displayed in [-200.0f32, -80.0, -79.9, 0.0, 79.9, 80.0, 200.0] {
        for velocity in [-1_000.0f32, -300.0, 0.0, 299.0, 300.0, 1_000.0] {
            let decision = decide_commit(displayed, velocity, &thresholds);
            let by_distance = displayed.abs() >= 80.0;
            let by_velocity = velocity.abs() >= 300.0;
            match decision {
                CommitDecision::SnapBack => assert!(!by_distance && !by_velocity),
                CommitDecision::Commit(_) => assert!(by_distance || by_velocity),
            }
        }
    }
}

#[test]
fn drag_tracker_captures_first_pointer_only() {
    let mut tracker = DragTracker::new();
    assert!(tracker.on_down(&PointerEvent::down(Point::new(10.0, 300.0), 0).with_id(1)));
    assert!(!tracker.on_down(&PointerEvent::down(Point::new(0.0, 0.0), 5).with_id(2)));

    assert_eq!(
        tracker.on_move(&PointerEvent::moved(Point::new(0.0, 0.0), 8).with_id(2)),
        None
    );
    assert_eq!(
        tracker.on_move(&PointerEvent::moved(Point::new(12.0, 250.0), 16).with_id(1)),
        Some(Point::new(2.0, -50.0))
    );
    assert_eq!(tracker.delta(), Point::new(2.0, -50.0));
    assert_eq!(tracker.captured_pointer(), Some(1));
}

#[test]
fn drag_tracker_release_reports_delta_and_velocity() {
    let mut tracker = DragTracker::new();
    tracker.on_down(&PointerEvent::down(Point::new(0.0, 400.0), 0));
    for step in 1..=5u64 {
        let y = 400.0 - step as f32 * 20.0;
        tracker.on_move(&PointerEvent::moved(Point::new(0.0, y), step * 10));
    }
    let release = tracker
        .on_up(&PointerEvent::up(Point::new(0.0, 300.0), 50))
        .expect("captured pointer releases");
    assert_eq!(release.delta, Point::new(0.0, -100.0));
    assert!(release.velocity.y < -1_000.0, "{:?}", release.velocity);
    assert!(!release.cancelled);
    assert!(!tracker.is_dragging());
    assert_eq!(tracker.delta(), Point::ZERO);
}

#[test]
fn cancel_releases_capture_like_up() {
    let mut tracker = DragTracker::new();
    tracker.on_down(&PointerEvent::down(Point::new(0.0, 0.0), 0).with_id(4));
    tracker.on_move(&PointerEvent::moved(Point::new(30.0, 0.0), 16).with_id(4));
    let release = tracker
        .on_cancel(&PointerEvent::cancel(Point::new(30.0, 0.0), 32).with_id(4))
        .expect("cancel finalizes");
    assert!(release.cancelled);
    assert_eq!(release.delta, Point::new(30.0, 0.0));
    assert!(tracker.on_down(&PointerEvent::down(Point::ZERO, 40).with_id(5)));
}

#[test]
fn release_from_uncaptured_pointer_is_ignored() {
    let mut tracker = DragTracker::new();
    assert_eq!(tracker.on_up(&PointerEvent::up(Point::ZERO, 0)), None);
    tracker.on_down(&PointerEvent::down(Point::ZERO, 0).with_id(1));
    assert_eq!(tracker.on_up(&PointerEvent::up(Point::ZERO, 10).with_id(2)), None);
    assert!(tracker.is_dragging());
}
