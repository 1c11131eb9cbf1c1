//! Single-pointer drag tracking.

use snapdeck_ui_graphics::Point;

use crate::input::{PointerEvent, PointerId};
use crate::velocity_tracker::{Velocity, VelocityTracker};

/// Outcome of a finished drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragRelease {
    /// Final position minus the press position.
    pub delta: Point,
    /// Release velocity, clamped to the maximum fling velocity.
    pub velocity: Velocity,
    /// True when the drag ended with a cancel rather than a lift.
    pub cancelled: bool,
}

/// Tracks one captured pointer from press to release.
///
/// The first pointer to go down is captured; events from any other pointer
/// are ignored until it lifts or is cancelled.
#[derive(Clone, Default)]
pub struct DragTracker {
    captured: Option<PointerId>,
    origin: Point,
    current: Point,
    velocity: VelocityTracker,
}

impl DragTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.captured.is_some()
    }

    pub fn captured_pointer(&self) -> Option<PointerId> {
        self.captured
    }

    /// Current position minus the press position; zero when idle.
    pub fn delta(&self) -> Point {
        if self.captured.is_some() {
            self.current - self.origin
        } else {
            Point::ZERO
        }
    }

    /// Starts tracking. Returns `false` when another pointer is already
    /// captured.
    pub fn on_down(&mut self, event: &PointerEvent) -> bool {
        if self.captured.is_some() {
            return false;
        }
        self.captured = Some(event.id);
        self.origin = event.position;
        self.current = event.position;
        self.velocity.reset();
        self.velocity.add_position(event.time_ms, event.position);
        true
    }

    /// Updates the tracked position and returns the new delta, or `None` for
    /// events from a pointer that is not captured.
    pub fn on_move(&mut self, event: &PointerEvent) -> Option<Point> {
        if self.captured != Some(event.id) {
            return None;
        }
        self.current = event.position;
        self.velocity.add_position(event.time_ms, event.position);
        Some(self.current - self.origin)
    }

    /// Ends the drag and releases capture.
    pub fn on_up(&mut self, event: &PointerEvent) -> Option<DragRelease> {
        self.finish(event, false)
    }

    /// Ends the drag exactly like [`DragTracker::on_up`], flagged as cancelled.
    pub fn on_cancel(&mut self, event: &PointerEvent) -> Option<DragRelease> {
        self.finish(event, true)
    }

    /// Drops capture without producing a release.
    pub fn reset(&mut self) {
        self.captured = None;
        self.velocity.reset();
    }

    fn finish(&mut self, event: &PointerEvent, cancelled: bool) -> Option<DragRelease> {
        if self.captured != Some(event.id) {
            return None;
        }
        if event.position.is_finite() {
            self.current = event.position;
            self.velocity.add_position(event.time_ms, event.position);
        }
        let release = DragRelease {
            delta: self.current - self.origin,
            velocity: self.velocity.calculate_velocity(),
            cancelled,
        };
        self.reset();
        Some(release)
    }
}

impl std::fmt::Debug for DragTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DragTracker")
            .field("captured", &self.captured)
            .field("delta", &self.delta())
            .finish()
    }
}
