//! Shared gesture constants.
//!
//! Values are in logical pixels (and logical pixels per second).

/// Distance past which a press is treated as a drag rather than a tap.
pub const DRAG_THRESHOLD: f32 = 8.0;

/// Maximum fling velocity in logical pixels per second. Release velocities
/// are clamped to this before any commit decision.
pub const MAX_FLING_VELOCITY: f32 = 8_000.0;

/// Exponent of the past-the-edge rubber band.
pub const RUBBER_BAND_EXPONENT: f32 = 0.7;

/// Scale of the past-the-edge rubber band.
pub const RUBBER_BAND_SCALE: f32 = 0.4;

/// Lower bound of the useful saturation constant range.
pub const MIN_SATURATION: f32 = 320.0;

/// Upper bound of the useful saturation constant range.
pub const MAX_SATURATION: f32 = 500.0;
