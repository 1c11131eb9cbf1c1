//! Foundation input layer for Snapdeck
//!
//! Everything between a raw platform pointer event and a gesture controller:
//! the [`PointerEvent`] model and [`PointerDispatcher`] queue, an
//! [`InputClock`] for timestamps, impulse velocity tracking, and the pure
//! drag math (capture, resistance curves, commit decision) that the carousel
//! and the deck share.

pub mod gesture_constants;
pub mod gestures;
pub mod input;
pub mod velocity_tracker;

pub use gestures::{
    decide_commit, rubber_band, saturating, AxisDirection, CommitDecision, CommitThresholds,
    DragRelease, DragResistance, DragTracker,
};
pub use input::{
    InputClock, Orientation, PointerDispatcher, PointerEvent, PointerEventKind, PointerId,
    PointerInputTarget,
};
pub use velocity_tracker::{Velocity, VelocityTracker, VelocityTracker1D};

pub mod prelude {
    pub use crate::gesture_constants::*;
    pub use crate::gestures::*;
    pub use crate::input::*;
    pub use crate::velocity_tracker::{Velocity, VelocityTracker};
}
