//! Robot-style driver for gesture controllers.
//!
//! A [`GestureRobot`] owns the [`Runtime`] a controller was built against,
//! a simulated clock and the controller itself. Pointer interactions are
//! played back with frames pumped in between, the same way a host would
//! interleave input and rendering.
//!
//! ```ignore
//! let runtime = Runtime::default();
//! let carousel = CarouselController::new(runtime.handle(), 5, CarouselConfig::default());
//! let mut robot = GestureRobot::new(runtime, carousel);
//! robot.drag(Point::new(200.0, 500.0), Point::new(200.0, 400.0), 160);
//! robot.wait_for_idle();
//! ```

use snapdeck_core::Runtime;
use snapdeck_foundation::{PointerEvent, PointerId, PointerInputTarget};
use snapdeck_ui_graphics::Point;

/// Frame period of the simulated display (60 Hz).
pub const FRAME_NANOS: u64 = 16_666_667;

/// Upper bound on frames pumped by [`GestureRobot::wait_for_idle`].
pub const MAX_IDLE_FRAMES: usize = 600;

pub struct GestureRobot<T: PointerInputTarget> {
    runtime: Runtime,
    target: T,
    now_nanos: u64,
    pointer: Point,
    pointer_id: PointerId,
    pressed: bool,
    frames: u64,
}

impl<T: PointerInputTarget> GestureRobot<T> {
    pub fn new(runtime: Runtime, target: T) -> Self {
        Self {
            runtime,
            target,
            now_nanos: 0,
            pointer: Point::ZERO,
            pointer_id: 0,
            pressed: false,
            frames: 0,
        }
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn target_mut(&mut self) -> &mut T {
        &mut self.target
    }

    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    /// Simulated time in milliseconds.
    pub fn now_ms(&self) -> u64 {
        self.now_nanos / 1_000_000
    }

    /// Frames pumped so far.
    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    /// Uses `id` for subsequent pointer events.
    pub fn with_pointer_id(mut self, id: PointerId) -> Self {
        self.pointer_id = id;
        self
    }

    /// Delivers an arbitrary event, stamped with the current time.
    pub fn send(&mut self, event: PointerEvent) -> bool {
        self.target.on_pointer_event(&event)
    }

    pub fn press(&mut self, at: Point) -> bool {
        self.pointer = at;
        self.pressed = true;
        let event = PointerEvent::down(at, self.now_ms()).with_id(self.pointer_id);
        self.target.on_pointer_event(&event)
    }

    pub fn move_to(&mut self, to: Point) -> bool {
        self.pointer = to;
        let event = PointerEvent::moved(to, self.now_ms()).with_id(self.pointer_id);
        self.target.on_pointer_event(&event)
    }

    pub fn release(&mut self) -> bool {
        self.pressed = false;
        let event = PointerEvent::up(self.pointer, self.now_ms()).with_id(self.pointer_id);
        self.target.on_pointer_event(&event)
    }

    pub fn cancel(&mut self) -> bool {
        self.pressed = false;
        let event = PointerEvent::cancel(self.pointer, self.now_ms()).with_id(self.pointer_id);
        self.target.on_pointer_event(&event)
    }

    /// Moves the pressed pointer to `to` in a straight line over
    /// `duration_ms`, one move per frame.
    pub fn move_over(&mut self, to: Point, duration_ms: u64) {
        let from = self.pointer;
        let steps = (duration_ms * 1_000_000 / FRAME_NANOS).max(1);
        for step in 1..=steps {
            self.advance_frame();
            let fraction = step as f32 / steps as f32;
            let next = Point::new(
                from.x + (to.x - from.x) * fraction,
                from.y + (to.y - from.y) * fraction,
            );
            self.move_to(next);
        }
    }

    /// Press at `from`, move to `to` over `duration_ms`, release.
    pub fn drag(&mut self, from: Point, to: Point, duration_ms: u64) {
        self.press(from);
        self.move_over(to, duration_ms);
        self.release();
    }

    /// Like [`GestureRobot::drag`] but ends with a cancel.
    pub fn drag_and_cancel(&mut self, from: Point, to: Point, duration_ms: u64) {
        self.press(from);
        self.move_over(to, duration_ms);
        self.cancel();
    }

    /// A quick drag over a few frames; the release carries the speed.
    pub fn fling(&mut self, from: Point, to: Point) {
        self.drag(from, to, 50);
    }

    /// Keeps the pointer still (and pressed, if it is) for `duration_ms`.
    pub fn hold(&mut self, duration_ms: u64) {
        self.advance_time(duration_ms);
    }

    /// Pumps one frame and lets the target pick up completions.
    pub fn advance_frame(&mut self) {
        self.now_nanos += FRAME_NANOS;
        self.frames += 1;
        self.runtime.drain_frame_callbacks(self.now_nanos);
        self.target.on_frame();
    }

    /// Pumps frames until at least `duration_ms` of simulated time passed.
    pub fn advance_time(&mut self, duration_ms: u64) {
        let until = self.now_nanos + duration_ms * 1_000_000;
        while self.now_nanos < until {
            self.advance_frame();
        }
    }

    /// Pumps frames until the target is idle and no frame callback is
    /// pending. Returns the number of frames pumped.
    pub fn wait_for_idle(&mut self) -> usize {
        let mut pumped = 0;
        while pumped < MAX_IDLE_FRAMES
            && (!self.target.is_idle() || self.runtime.has_frame_callbacks())
        {
            self.advance_frame();
            pumped += 1;
        }
        if pumped == MAX_IDLE_FRAMES {
            log::warn!("target still busy after {} frames", MAX_IDLE_FRAMES);
        }
        pumped
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    pub fn into_target(self) -> T {
        self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use snapdeck_foundation::PointerEventKind;

    #[derive(Default)]
    struct Recorder {
        events: Vec<(PointerEventKind, Point, u64)>,
        frames: usize,
    }

    impl PointerInputTarget for Recorder {
        fn on_pointer_event(&mut self, event: &PointerEvent) -> bool {
            self.events.push((event.kind, event.position, event.time_ms));
            true
        }

        fn on_frame(&mut self) {
            self.frames += 1;
        }

        fn is_idle(&self) -> bool {
            true
        }
    }

    #[test]
    fn drag_interleaves_moves_with_frames() {
        let mut robot = GestureRobot::new(Runtime::default(), Recorder::default());
        robot.drag(Point::new(0.0, 100.0), Point::new(0.0, 0.0), 100);

        let recorder = robot.target();
        let kinds: Vec<_> = recorder.events.iter().map(|(kind, _, _)| *kind).collect();
        assert_eq!(kinds.first(), Some(&PointerEventKind::Down));
        assert_eq!(kinds.last(), Some(&PointerEventKind::Up));
        assert_eq!(recorder.events.len(), 2 + recorder.frames);
        assert_eq!(recorder.events.last().map(|e| e.1), Some(Point::new(0.0, 0.0)));
        let times: Vec<_> = recorder.events.iter().map(|e| e.2).collect();
        assert!(times.windows(2).all(|pair| pair[0] <= pair[1]));
        assert!(!robot.is_pressed());
    }

    #[test]
    fn advance_time_covers_requested_duration() {
        let mut robot = GestureRobot::new(Runtime::default(), Recorder::default());
        robot.advance_time(100);
        assert!(robot.now_ms() >= 100);
        assert_eq!(robot.frame_count(), 6);
    }

    #[test]
    fn wait_for_idle_returns_immediately_when_nothing_is_pending() {
        let mut robot = GestureRobot::new(Runtime::default(), Recorder::default());
        assert_eq!(robot.wait_for_idle(), 0);
    }
}
