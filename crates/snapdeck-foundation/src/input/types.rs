use snapdeck_ui_graphics::Point;
use std::cell::Cell;
use std::rc::Rc;

pub type PointerId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

/// Drag axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Component of `point` along this axis.
    pub fn component(self, point: Point) -> f32 {
        match self {
            Orientation::Horizontal => point.x,
            Orientation::Vertical => point.y,
        }
    }
}

/// Pointer event with consumption tracking.
///
/// A target that acts on an event consumes it so later targets in the same
/// dispatch pass can tell it was handled. Copies share the consumed flag.
#[derive(Clone, Debug)]
pub struct PointerEvent {
    pub id: PointerId,
    pub kind: PointerEventKind,
    pub position: Point,
    /// Monotonic timestamp in milliseconds.
    pub time_ms: u64,
    consumed: Rc<Cell<bool>>,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, position: Point, time_ms: u64) -> Self {
        Self {
            id: 0,
            kind,
            position,
            time_ms,
            consumed: Rc::new(Cell::new(false)),
        }
    }

    pub fn down(position: Point, time_ms: u64) -> Self {
        Self::new(PointerEventKind::Down, position, time_ms)
    }

    pub fn moved(position: Point, time_ms: u64) -> Self {
        Self::new(PointerEventKind::Move, position, time_ms)
    }

    pub fn up(position: Point, time_ms: u64) -> Self {
        Self::new(PointerEventKind::Up, position, time_ms)
    }

    pub fn cancel(position: Point, time_ms: u64) -> Self {
        Self::new(PointerEventKind::Cancel, position, time_ms)
    }

    pub fn with_id(mut self, id: PointerId) -> Self {
        self.id = id;
        self
    }

    pub fn consume(&self) {
        self.consumed.set(true);
    }

    pub fn is_consumed(&self) -> bool {
        self.consumed.get()
    }
}

/// Something that reacts to pointer input and advances with the frame clock.
pub trait PointerInputTarget {
    /// Handles one event. Returns `true` when the event was acted upon.
    fn on_pointer_event(&mut self, event: &PointerEvent) -> bool;

    /// Called after the runtime drained a frame, so the target can pick up
    /// animation completions.
    fn on_frame(&mut self) {}

    /// True when the target has no gesture or animation in flight.
    fn is_idle(&self) -> bool;
}
