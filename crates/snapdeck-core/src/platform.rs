//! Platform abstraction traits for runtime services.
//!
//! These traits let the host (browser shell, desktop window, test robot)
//! provide frame scheduling and haptics without the controllers depending on
//! any platform API.

/// Schedules work for the runtime.
///
/// Called whenever a frame callback is registered so the host can request an
/// animation frame. Hosts that pump frames unconditionally can ignore it.
pub trait RuntimeScheduler {
    /// Request that the host schedule a new frame.
    fn schedule_frame(&self);
}

/// Short vibration pulse, e.g. `navigator.vibrate(ms)` on the web.
pub trait HapticFeedback {
    fn pulse(&self, duration_ms: u32);
}

/// Haptics sink for hosts without a vibration motor.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoHaptics;

impl HapticFeedback for NoHaptics {
    fn pulse(&self, _duration_ms: u32) {}
}
