//! How the top card, the card behind it and the progress line look for a
//! given drag offset.

use snapdeck_ui_graphics::{Color, Point};

use super::config::DeckConfig;

pub const MAX_ROTATION_DEG: f32 = 6.0;
/// Horizontal pixels per degree of rotation.
pub const ROTATION_DIVISOR: f32 = 22.0;
pub const MAX_SCALE_LOSS: f32 = 0.02;
pub const SCALE_DIVISOR: f32 = 1500.0;
pub const MAX_OPACITY_LOSS: f32 = 0.06;
pub const OPACITY_DIVISOR: f32 = 1100.0;
pub const LEAVING_OPACITY: f32 = 0.9;

pub const NEUTRAL_BORDER: Color = Color::from_rgba_u8(241, 245, 249, 255);
pub const ACCEPT_BORDER: Color = Color::from_rgb_u8(34, 197, 94);
pub const REJECT_BORDER: Color = Color::from_rgb_u8(239, 68, 68);

/// Offset and scale of the card waiting behind the top one.
pub const NEXT_CARD_OFFSET_Y: f32 = 12.0;
pub const NEXT_CARD_SCALE: f32 = 0.988;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardAppearance {
    pub translation: Point,
    pub rotation_deg: f32,
    pub scale: f32,
    pub opacity: f32,
    pub border: Color,
    /// Whether the host should animate style changes on this frame.
    pub transition_enabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NextCardAppearance {
    pub offset_y: f32,
    pub scale: f32,
}

impl Default for NextCardAppearance {
    fn default() -> Self {
        Self {
            offset_y: NEXT_CARD_OFFSET_Y,
            scale: NEXT_CARD_SCALE,
        }
    }
}

/// Neutral at rest; green toward accept, red toward reject, reaching full
/// tint at the active threshold.
pub fn border_color(displayed_x: f32, config: &DeckConfig) -> Color {
    if displayed_x == 0.0 || !displayed_x.is_finite() {
        return NEUTRAL_BORDER;
    }
    let threshold = config.threshold_for(displayed_x);
    let progress = if threshold > 0.0 {
        (displayed_x.abs() / threshold).min(1.0)
    } else {
        1.0
    };
    let tint = if displayed_x > 0.0 {
        ACCEPT_BORDER
    } else {
        REJECT_BORDER
    };
    tint.with_alpha(progress * config.border_max_opacity)
}

pub fn card_appearance(
    displayed: Point,
    leaving: bool,
    transition_enabled: bool,
    config: &DeckConfig,
) -> CardAppearance {
    let x = displayed.x;
    let opacity = if leaving {
        LEAVING_OPACITY
    } else {
        1.0 - (x.abs() / OPACITY_DIVISOR).min(MAX_OPACITY_LOSS)
    };
    CardAppearance {
        translation: displayed,
        rotation_deg: (x / ROTATION_DIVISOR).clamp(-MAX_ROTATION_DEG, MAX_ROTATION_DEG),
        scale: 1.0 - (x.abs() / SCALE_DIVISOR).min(MAX_SCALE_LOSS),
        opacity,
        border: border_color(x, config),
        transition_enabled,
    }
}

/// `"{n} / {count}"` where `n` is the 1-based card number, capped at `count`.
pub fn progress_text(index: usize, count: usize) -> String {
    format!("{} / {}", (index + 1).min(count), count)
}
