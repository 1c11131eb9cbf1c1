//! Raw drag delta to displayed delta.

use crate::gesture_constants::{RUBBER_BAND_EXPONENT, RUBBER_BAND_SCALE};

/// `d / (1 + |d| / k)`. Monotonic, odd, and bounded by `k` in magnitude.
/// A non-positive or non-finite `k` disables the curve.
pub fn saturating(delta: f32, k: f32) -> f32 {
    if !(k.is_finite() && k > 0.0) {
        return delta;
    }
    delta / (1.0 + delta.abs() / k)
}

/// Past-the-edge resistance: `sign(d) * |d|^0.7 * 0.4`.
pub fn rubber_band(delta: f32) -> f32 {
    if delta == 0.0 {
        return 0.0;
    }
    delta.signum() * delta.abs().powf(RUBBER_BAND_EXPONENT) * RUBBER_BAND_SCALE
}

/// Resistance applied to drags that stay within bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragResistance {
    /// Linear multiplier on the raw delta, in `0..=1`.
    pub multiplier: f32,
    /// Saturation constant applied after the multiplier.
    pub saturation: Option<f32>,
}

impl DragResistance {
    /// Follows the finger 1:1.
    pub const NONE: DragResistance = DragResistance {
        multiplier: 1.0,
        saturation: None,
    };

    pub fn linear(multiplier: f32) -> Self {
        Self {
            multiplier: multiplier.clamp(0.0, 1.0),
            saturation: None,
        }
    }

    pub fn saturating(k: f32) -> Self {
        Self {
            multiplier: 1.0,
            saturation: Some(k),
        }
    }

    pub fn with_saturation(mut self, k: Option<f32>) -> Self {
        self.saturation = k;
        self
    }

    pub fn apply(&self, raw: f32) -> f32 {
        if !raw.is_finite() {
            return 0.0;
        }
        let scaled = raw * self.multiplier;
        match self.saturation {
            Some(k) => saturating(scaled, k),
            None => scaled,
        }
    }
}

impl Default for DragResistance {
    fn default() -> Self {
        Self::NONE
    }
}
