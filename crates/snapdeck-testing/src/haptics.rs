use std::cell::RefCell;

use snapdeck_core::HapticFeedback;

/// Haptics sink that remembers every pulse.
#[derive(Debug, Default)]
pub struct RecordingHaptics {
    pulses: RefCell<Vec<u32>>,
}

impl RecordingHaptics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Durations of every pulse so far, oldest first.
    pub fn pulses(&self) -> Vec<u32> {
        self.pulses.borrow().clone()
    }

    pub fn count(&self) -> usize {
        self.pulses.borrow().len()
    }

    pub fn clear(&self) {
        self.pulses.borrow_mut().clear();
    }
}

impl HapticFeedback for RecordingHaptics {
    fn pulse(&self, duration_ms: u32) {
        self.pulses.borrow_mut().push(duration_ms);
    }
}
