use snapdeck_animation::{AnimationSpec, AnimationType, Easing};
use snapdeck_foundation::CommitThresholds;

pub const DECK_HAPTIC_MS: u32 = 8;

/// Tuning for [`TriageDeck`](super::TriageDeck).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeckConfig {
    /// Displayed distance (px) to the right that accepts.
    pub accept_threshold: f32,
    /// Displayed distance (px) to the left that rejects.
    pub reject_threshold: f32,
    /// Release speed (px/s) that commits regardless of distance. Off by default.
    pub velocity_threshold: Option<f32>,
    /// Saturation constant of the horizontal drag curve.
    pub saturation: f32,
    /// Factor applied to the vertical drag.
    pub vertical_scale: f32,
    /// Maximum vertical drift either way (px).
    pub vertical_limit: f32,
    /// Distance past the viewport edge a card flies to.
    pub exit_margin: f32,
    pub exit: AnimationType,
    pub snap_back: AnimationType,
    /// Border tint opacity at full threshold.
    pub border_max_opacity: f32,
    pub haptic_ms: u32,
}

impl DeckConfig {
    pub fn with_thresholds(mut self, reject: f32, accept: f32) -> Self {
        self.reject_threshold = reject.max(0.0);
        self.accept_threshold = accept.max(0.0);
        self
    }

    pub fn with_velocity_threshold(mut self, pixels_per_second: Option<f32>) -> Self {
        self.velocity_threshold = pixels_per_second;
        self
    }

    pub fn with_saturation(mut self, k: f32) -> Self {
        self.saturation = k;
        self
    }

    pub fn with_exit(mut self, exit: AnimationType) -> Self {
        self.exit = exit;
        self
    }

    pub fn with_snap_back(mut self, snap_back: AnimationType) -> Self {
        self.snap_back = snap_back;
        self
    }

    pub fn thresholds(&self) -> CommitThresholds {
        CommitThresholds::asymmetric(self.reject_threshold, self.accept_threshold)
            .with_velocity(self.velocity_threshold)
    }

    /// Threshold for the direction `displayed_x` points to.
    pub fn threshold_for(&self, displayed_x: f32) -> f32 {
        self.thresholds().distance_for(displayed_x)
    }
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            accept_threshold: 60.0,
            reject_threshold: 45.0,
            velocity_threshold: None,
            saturation: 500.0,
            vertical_scale: 0.15,
            vertical_limit: 20.0,
            exit_margin: 400.0,
            exit: AnimationType::Tween(AnimationSpec::tween(
                380,
                Easing::CubicBezier(0.32, 0.0, 0.67, 0.0),
            )),
            snap_back: AnimationType::Tween(AnimationSpec::tween(280, Easing::EaseOut)),
            border_max_opacity: 0.9,
            haptic_ms: DECK_HAPTIC_MS,
        }
    }
}
