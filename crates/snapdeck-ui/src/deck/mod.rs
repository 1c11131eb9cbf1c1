//! Swipe-to-triage card deck.

mod appearance;
mod config;
mod controller;
mod review;

pub use appearance::*;
pub use config::{DeckConfig, DECK_HAPTIC_MS};
pub use controller::{
    DeckEvent, DeckPhase, SwipeDirection, TriageDeck, TRANSITION_SUPPRESS_FRAMES,
};
pub use review::{Decision, ReviewItem, Selection};
