use snapdeck_foundation::{
    InputClock, Orientation, PointerDispatcher, PointerEvent, PointerEventKind, PointerInputTarget,
};
use snapdeck_ui_graphics::Point;

#[derive(Default)]
struct Recorder {
    seen: Vec<PointerEventKind>,
    accept_moves: bool,
}

impl PointerInputTarget for Recorder {
    fn on_pointer_event(&mut self, event: &PointerEvent) -> bool {
        self.seen.push(event.kind);
        event.kind != PointerEventKind::Move || self.accept_moves
    }

    fn is_idle(&self) -> bool {
        true
    }
}

#[test]
fn dispatcher_delivers_in_arrival_order_and_marks_handled_events() {
    let mut dispatcher = PointerDispatcher::new();
    let down = PointerEvent::down(Point::new(1.0, 2.0), 0);
    let moved = PointerEvent::moved(Point::new(1.0, 12.0), 16);
    let up = PointerEvent::up(Point::new(1.0, 12.0), 32);
    let probes = (down.clone(), moved.clone(), up.clone());
    dispatcher.push(down);
    dispatcher.push(moved);
    dispatcher.push(up);
    assert_eq!(dispatcher.len(), 3);

    let mut target = Recorder::default();
    let handled = dispatcher.dispatch_to(&mut target);

    assert_eq!(handled, 2);
    assert!(dispatcher.is_empty());
    assert_eq!(
        target.seen,
        vec![
            PointerEventKind::Down,
            PointerEventKind::Move,
            PointerEventKind::Up
        ]
    );
    assert!(probes.0.is_consumed());
    assert!(!probes.1.is_consumed());
    assert!(probes.2.is_consumed());
}

#[test]
fn orientation_picks_axis_component() {
    let point = Point::new(3.0, -7.0);
    assert_eq!(Orientation::Horizontal.component(point), 3.0);
    assert_eq!(Orientation::Vertical.component(point), -7.0);
}

#[test]
fn input_clock_is_monotonic() {
    let clock = InputClock::new();
    let first = clock.now_nanos();
    let second = clock.now_nanos();
    assert!(second >= first);
    assert!(clock.now_ms() <= clock.now_nanos() / 1_000_000 + 1);
}
