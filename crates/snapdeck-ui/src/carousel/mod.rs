//! Drag-to-snap vertical carousel.

mod appearance;
mod config;
mod controller;

pub use appearance::*;
pub use config::{CarouselConfig, CAROUSEL_HAPTIC_MS, MAX_PEEK_AMOUNT};
pub use controller::{
    CarouselController, CarouselEvent, CarouselPhase, CarouselState, CarouselView, TrackView,
};
