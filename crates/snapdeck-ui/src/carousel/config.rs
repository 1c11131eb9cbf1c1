use snapdeck_animation::{AnimationSpec, AnimationType, Easing};
use snapdeck_foundation::{CommitThresholds, DragResistance};

/// Pulse length when the settled index changes.
pub const CAROUSEL_HAPTIC_MS: u32 = 10;

/// Largest accepted peek fraction. A full-container peek would leave items
/// with no extent.
pub const MAX_PEEK_AMOUNT: f32 = 0.9;

/// Tuning for [`CarouselController`](super::CarouselController).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselConfig {
    /// Fraction of the container left for the next item's peek.
    pub peek_amount: f32,
    /// Displayed drag distance (px) that commits a page change.
    pub snap_threshold: f32,
    /// Release speed (px/s) that commits a page change.
    pub velocity_threshold: f32,
    /// Multiplier on the raw delta while dragging within bounds.
    pub resistance: f32,
    /// Saturation constant applied after the multiplier.
    pub saturation: Option<f32>,
    /// Index shown first; clamped to the collection.
    pub initial_index: usize,
    /// Animation used to settle on an index.
    pub settle: AnimationType,
    pub haptic_ms: u32,
}

impl CarouselConfig {
    pub fn with_peek_amount(mut self, peek_amount: f32) -> Self {
        self.peek_amount = if peek_amount.is_finite() {
            peek_amount.clamp(0.0, MAX_PEEK_AMOUNT)
        } else {
            0.0
        };
        self
    }

    pub fn with_snap_threshold(mut self, pixels: f32) -> Self {
        self.snap_threshold = pixels.max(0.0);
        self
    }

    pub fn with_velocity_threshold(mut self, pixels_per_second: f32) -> Self {
        self.velocity_threshold = pixels_per_second.max(0.0);
        self
    }

    pub fn with_resistance(mut self, resistance: f32) -> Self {
        self.resistance = resistance.clamp(0.0, 1.0);
        self
    }

    pub fn with_saturation(mut self, k: Option<f32>) -> Self {
        self.saturation = k;
        self
    }

    pub fn with_initial_index(mut self, index: usize) -> Self {
        self.initial_index = index;
        self
    }

    pub fn with_settle(mut self, settle: AnimationType) -> Self {
        self.settle = settle;
        self
    }

    pub fn thresholds(&self) -> CommitThresholds {
        CommitThresholds::symmetric(self.snap_threshold).with_velocity(Some(self.velocity_threshold))
    }

    pub fn drag_resistance(&self) -> DragResistance {
        DragResistance::linear(self.resistance).with_saturation(self.saturation)
    }
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            peek_amount: 0.1,
            snap_threshold: 80.0,
            velocity_threshold: 300.0,
            resistance: 1.0,
            saturation: None,
            initial_index: 0,
            settle: AnimationType::Tween(AnimationSpec::tween(280, Easing::Ease)),
            haptic_ms: CAROUSEL_HAPTIC_MS,
        }
    }
}
