//! Scripted walk through the Snapdeck controllers without a renderer.
//!
//! Run with `RUST_LOG=debug` to see every gesture decision.

mod host;

use std::rc::Rc;

use anyhow::Context;
use snapdeck_core::{HapticFeedback, Runtime};
use snapdeck_foundation::PointerEvent;
use snapdeck_ui::{
    CarouselConfig, CarouselController, DeckConfig, PointerInputTarget, RecordingButton,
    TriageDeck,
};
use snapdeck_ui_graphics::Point;

use host::Host;

const CONTAINER_HEIGHT: f32 = 800.0;
const VIEWPORT_WIDTH: f32 = 390.0;

/// Haptics that just log; a platform shell would buzz the device here.
struct LogHaptics;

impl HapticFeedback for LogHaptics {
    fn pulse(&self, duration_ms: u32) {
        log::info!("haptic pulse {}ms", duration_ms);
    }
}

fn init_logging() {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();
}

fn run_carousel(haptics: Rc<dyn HapticFeedback>) {
    let runtime = Runtime::default();
    let mut carousel = CarouselController::new(runtime.handle(), 5, CarouselConfig::default())
        .with_haptics(haptics)
        .with_on_index_change(|index| log::info!("carousel now showing item {}", index + 1));
    carousel.measure(CONTAINER_HEIGHT);
    let mut host = Host::new(runtime);

    log::info!("carousel: {}", carousel.indicator_text());
    // Forward, forward, a half-hearted drag that snaps back, then back.
    host.drag(&mut carousel, Point::new(200.0, 600.0), Point::new(200.0, 450.0), 10);
    host.drag(&mut carousel, Point::new(200.0, 600.0), Point::new(200.0, 480.0), 8);
    host.drag(&mut carousel, Point::new(200.0, 400.0), Point::new(200.0, 430.0), 36);
    host.drag(&mut carousel, Point::new(200.0, 300.0), Point::new(200.0, 420.0), 8);
    log::info!(
        "carousel: {} (offset {:.1}px)",
        carousel.indicator_text(),
        carousel.offset()
    );
}

fn run_deck(haptics: Rc<dyn HapticFeedback>) -> anyhow::Result<()> {
    let runtime = Runtime::default();
    let ideas: Vec<String> = (1..=10).map(|n| format!("idea-{n}")).collect();
    let mut deck = TriageDeck::new(runtime.handle(), ideas, DeckConfig::default())
        .with_viewport_width(VIEWPORT_WIDTH)
        .with_haptics(haptics);
    let mut host = Host::new(runtime);

    let mut round = 0;
    while !deck.is_exhausted() {
        log::info!("deck: {}", deck.progress_text());
        let dx = if round % 3 == 0 { 140.0 } else { -140.0 };
        host.drag(&mut deck, Point::new(195.0, 400.0), Point::new(195.0 + dx, 410.0), 12);
        round += 1;
    }

    for item in deck.review_list()? {
        log::info!("review {} -> {:?}", item.id, item.decision);
    }
    let changed = deck.toggle(&"idea-2".to_string())?;
    log::info!("toggled idea-2 to {:?}", changed);

    let selection = deck.confirm().context("confirming the review")?;
    log::info!("accepted: {}", selection.accepted.join(", "));
    log::info!("rejected: {}", selection.rejected.join(", "));
    Ok(())
}

fn run_recording_button() {
    let runtime = Runtime::default();
    let mut button = RecordingButton::new(runtime.handle());
    let mut host = Host::new(runtime);

    for _ in 0..2 {
        let recording = button.toggle();
        host.settle(&mut NoInput);
        log::info!(
            "recording {}: width {:.1}, icon {:?}",
            recording,
            button.width(),
            button.icon()
        );
    }
}

/// Frame pump target for controllers that take no pointer input.
struct NoInput;

impl PointerInputTarget for NoInput {
    fn on_pointer_event(&mut self, _event: &PointerEvent) -> bool {
        false
    }

    fn is_idle(&self) -> bool {
        true
    }
}

fn main() -> anyhow::Result<()> {
    init_logging();

    let haptics: Rc<dyn HapticFeedback> = Rc::new(LogHaptics);
    run_carousel(Rc::clone(&haptics));
    run_deck(haptics)?;
    run_recording_button();
    Ok(())
}
