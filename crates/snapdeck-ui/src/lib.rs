//! Gesture controllers for Snapdeck
//!
//! Headless state machines that turn pointer input into what a renderer
//! should draw:
//!
//! * [`CarouselController`]: a vertical drag-to-snap carousel with a peek of
//!   the next item.
//! * [`TriageDeck`]: a swipe-right-to-accept, swipe-left-to-reject card deck
//!   with a review list once every card is swiped.
//! * [`RecordingButton`]: the spring-animated record toggle.
//!
//! Controllers are driven by [`PointerInputTarget::on_pointer_event`] and
//! [`PointerInputTarget::on_frame`] (called after each runtime frame) and
//! never block.

pub mod carousel;
pub mod deck;
mod error;
pub mod recording_button;

pub use carousel::{
    CarouselConfig, CarouselController, CarouselEvent, CarouselPhase, CarouselState,
    CarouselView, ItemAppearance, ItemRole, TrackView,
};
pub use deck::{
    CardAppearance, DeckConfig, DeckEvent, DeckPhase, Decision, NextCardAppearance, ReviewItem,
    Selection, SwipeDirection, TriageDeck,
};
pub use error::DeckError;
pub use recording_button::{RecordingButton, RecordingIcon};
pub use snapdeck_foundation::PointerInputTarget;

pub mod prelude {
    pub use crate::carousel::{CarouselConfig, CarouselController, CarouselView};
    pub use crate::deck::{DeckConfig, Decision, SwipeDirection, TriageDeck};
    pub use crate::recording_button::RecordingButton;
    pub use crate::DeckError;
    pub use snapdeck_foundation::PointerInputTarget;
}
