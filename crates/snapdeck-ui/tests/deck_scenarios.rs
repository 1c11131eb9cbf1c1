use std::rc::Rc;

use snapdeck_core::{HapticFeedback, Runtime};
use snapdeck_foundation::{saturating, PointerEvent};
use snapdeck_testing::{GestureRobot, RecordingHaptics};
use snapdeck_ui::{
    DeckConfig, DeckError, DeckPhase, Decision, PointerInputTarget, SwipeDirection, TriageDeck,
};
use snapdeck_ui_graphics::Point;

const CENTER: Point = Point { x: 200.0, y: 400.0 };

fn ideas() -> Vec<String> {
    (1..=10).map(|n| format!("idea-{n}")).collect()
}

fn deck_robot(items: Vec<String>, haptics: Rc<RecordingHaptics>) -> GestureRobot<TriageDeck<String>> {
    let runtime = Runtime::default();
    let deck = TriageDeck::new(runtime.handle(), items, DeckConfig::default())
        .with_viewport_width(390.0)
        .with_haptics(haptics as Rc<dyn HapticFeedback>);
    GestureRobot::new(runtime, deck)
}

fn swipe(robot: &mut GestureRobot<TriageDeck<String>>, dx: f32) {
    robot.drag(CENTER, Point::new(CENTER.x + dx, CENTER.y), 200);
    robot.wait_for_idle();
}

#[test]
fn scenario_c_swipe_right_accepts_and_suppresses_one_frame() {
    let haptics = Rc::new(RecordingHaptics::new());
    let mut robot = deck_robot(ideas(), haptics.clone());

    robot.drag(CENTER, Point::new(CENTER.x + 120.0, CENTER.y), 200);
    assert_eq!(robot.target().exit_direction(), Some(SwipeDirection::Right));
    assert_eq!(haptics.count(), 1);

    let mut frames = 0;
    while robot.target().phase() == DeckPhase::Exiting(SwipeDirection::Right) {
        robot.advance_frame();
        frames += 1;
        assert!(frames < 120, "exit never completed");
    }

    let deck = robot.target();
    assert_eq!(deck.current_index(), 1);
    assert_eq!(deck.status(&"idea-1".to_string()), Some(Decision::Accepted));
    assert_eq!(deck.displayed_offset(), Point::ZERO);
    assert_eq!(deck.progress_text(), "2 / 10");
    assert!(!deck.transition_enabled());

    robot.advance_frame();
    assert!(robot.target().transition_enabled());
}

#[test]
fn swipe_left_rejects() {
    let mut robot = deck_robot(ideas(), Rc::new(RecordingHaptics::new()));
    swipe(&mut robot, -120.0);
    assert_eq!(robot.target().current_index(), 1);
    assert_eq!(
        robot.target().status(&"idea-1".to_string()),
        Some(Decision::Rejected)
    );
}

#[test]
fn short_swipe_springs_back_without_a_decision() {
    let haptics = Rc::new(RecordingHaptics::new());
    let mut robot = deck_robot(ideas(), haptics.clone());
    swipe(&mut robot, 40.0);

    let deck = robot.target();
    assert_eq!(deck.current_index(), 0);
    assert_eq!(deck.phase(), DeckPhase::Showing);
    assert_eq!(deck.status(&"idea-1".to_string()), None);
    assert_eq!(deck.displayed_offset(), Point::ZERO);
    assert_eq!(haptics.count(), 0);
}

#[test]
fn cancel_is_treated_as_release() {
    let mut robot = deck_robot(ideas(), Rc::new(RecordingHaptics::new()));
    robot.drag_and_cancel(CENTER, Point::new(CENTER.x + 150.0, CENTER.y), 200);
    robot.wait_for_idle();
    assert_eq!(robot.target().current_index(), 1);
    assert_eq!(
        robot.target().status(&"idea-1".to_string()),
        Some(Decision::Accepted)
    );
}

#[test]
fn second_pointer_is_ignored_while_dragging() {
    let mut robot = deck_robot(ideas(), Rc::new(RecordingHaptics::new()));
    robot.press(CENTER);
    robot.move_over(Point::new(CENTER.x + 30.0, CENTER.y), 100);

    let intruder = PointerEvent::down(Point::new(10.0, 10.0), robot.now_ms()).with_id(7);
    assert!(!robot.send(intruder));
    let intruder_move = PointerEvent::moved(Point::new(300.0, 10.0), robot.now_ms()).with_id(7);
    assert!(!robot.send(intruder_move));
    assert_eq!(robot.target().raw_delta(), Point::new(30.0, 0.0));

    robot.release();
    robot.wait_for_idle();
    assert_eq!(robot.target().current_index(), 0);
}

#[test]
fn scenario_d_review_toggle_and_confirm() {
    let mut robot = deck_robot(ideas(), Rc::new(RecordingHaptics::new()));
    for n in 0..10 {
        let dx = if n % 3 == 0 { 150.0 } else { -150.0 };
        swipe(&mut robot, dx);
    }

    let deck = robot.target_mut();
    assert!(deck.is_exhausted());
    assert_eq!(deck.current_index(), 10);
    assert!(deck.card_appearance().is_none());

    let review = deck.review_list().expect("exhausted deck has a review list");
    assert_eq!(review.len(), 10);
    let accepted: Vec<_> = review
        .iter()
        .filter(|item| item.decision.is_accepted())
        .map(|item| item.id.as_str())
        .collect();
    assert_eq!(accepted, vec!["idea-1", "idea-4", "idea-7", "idea-10"]);

    let idea_2 = "idea-2".to_string();
    assert_eq!(deck.toggle(&idea_2), Ok(Decision::Accepted));
    assert_eq!(deck.current_index(), 10);
    assert_eq!(deck.toggle(&idea_2), Ok(Decision::Rejected));
    assert_eq!(deck.toggle(&idea_2), Ok(Decision::Accepted));

    assert_eq!(
        deck.toggle(&"idea-99".to_string()),
        Err(DeckError::UnknownItem {
            id: "\"idea-99\"".to_string()
        })
    );

    let selection = deck.confirm().expect("confirm once");
    assert_eq!(
        selection.accepted,
        vec!["idea-1", "idea-2", "idea-4", "idea-7", "idea-10"]
    );
    assert_eq!(selection.rejected.len(), 5);
    assert_eq!(deck.phase(), DeckPhase::Confirmed);

    assert_eq!(deck.confirm(), Err(DeckError::AlreadyConfirmed));
    assert_eq!(deck.toggle(&idea_2), Err(DeckError::AlreadyConfirmed));
}

#[test]
fn gestures_are_ignored_once_exhausted() {
    let mut robot = deck_robot(vec!["only".to_string()], Rc::new(RecordingHaptics::new()));
    swipe(&mut robot, 150.0);
    assert!(robot.target().is_exhausted());

    assert!(!robot.press(CENTER));
    robot.move_to(Point::new(CENTER.x - 200.0, CENTER.y));
    robot.release();
    robot.wait_for_idle();
    assert_eq!(
        robot.target().status(&"only".to_string()),
        Some(Decision::Accepted)
    );
}

#[test]
fn every_release_has_exactly_one_outcome() {
    // Each release either advances one card or leaves the index in place,
    // and a card is never decided twice.
    let offsets = [10.0, 59.0, 61.0, -44.0, -46.0, 300.0, -300.0, 0.0, 75.0, -75.0];
    let mut robot = deck_robot(ideas(), Rc::new(RecordingHaptics::new()));
    for dx in offsets {
        let before = robot.target().current_index();
        swipe(&mut robot, dx);
        let after = robot.target().current_index();
        let displayed = saturating(dx, robot.target().config().saturation);
        let committed = displayed >= 60.0 || displayed <= -45.0;
        assert_eq!(after, before + usize::from(committed), "offset {dx}");
        assert!(robot.target().is_idle());
    }
}

#[test]
fn saturating_display_never_exceeds_saturation() {
    let mut robot = deck_robot(ideas(), Rc::new(RecordingHaptics::new()));
    robot.press(CENTER);
    for dx in [100.0, 1_000.0, 10_000.0, 100_000.0, -100_000.0] {
        robot.move_to(Point::new(CENTER.x + dx, CENTER.y + dx));
        let displayed = robot.target().displayed_offset();
        assert!(displayed.x.abs() < 500.0, "dx {dx} displayed {}", displayed.x);
        assert!(displayed.y.abs() <= 20.0);
    }
    robot.release();
    robot.wait_for_idle();
}
