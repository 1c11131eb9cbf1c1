//! Expanding record/stop toggle.
//!
//! The button is a 40 px circle while idle and stretches to 100 px while
//! recording. Width and icon pop run on springs; tapping again mid-spring
//! retargets from wherever the width currently is. Audio capture is not
//! part of this controller.

use snapdeck_animation::{Animatable, AnimationType, SpringSpec};
use snapdeck_core::RuntimeHandle;

pub const IDLE_WIDTH: f32 = 40.0;
pub const RECORDING_WIDTH: f32 = 100.0;
/// Icon scale right after a swap; springs back to 1.
pub const ICON_POP_SCALE: f32 = 0.7;

pub fn width_spring() -> SpringSpec {
    SpringSpec::physical(320.0, 28.0, 1.0)
}

pub fn icon_spring() -> SpringSpec {
    SpringSpec::physical(400.0, 30.0, 1.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordingIcon {
    Microphone,
    Stop,
}

pub struct RecordingButton {
    recording: bool,
    width: Animatable<f32>,
    icon_scale: Animatable<f32>,
}

impl RecordingButton {
    pub fn new(runtime: RuntimeHandle) -> Self {
        Self {
            recording: false,
            width: Animatable::new(IDLE_WIDTH, runtime.clone()),
            icon_scale: Animatable::new(1.0, runtime),
        }
    }

    pub fn is_recording(&self) -> bool {
        self.recording
    }

    pub fn width(&self) -> f32 {
        self.width.value()
    }

    pub fn icon(&self) -> RecordingIcon {
        if self.recording {
            RecordingIcon::Stop
        } else {
            RecordingIcon::Microphone
        }
    }

    pub fn icon_scale(&self) -> f32 {
        self.icon_scale.value()
    }

    pub fn is_animating(&self) -> bool {
        self.width.is_running() || self.icon_scale.is_running()
    }

    /// Flips between idle and recording. Returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.recording = !self.recording;
        let target = if self.recording {
            RECORDING_WIDTH
        } else {
            IDLE_WIDTH
        };
        log::debug!("recording {}", self.recording);
        self.width
            .animate_to(target, AnimationType::Spring(width_spring()));
        self.icon_scale.snap_to(ICON_POP_SCALE);
        self.icon_scale
            .animate_to(1.0, AnimationType::Spring(icon_spring()));
        self.recording
    }
}

impl std::fmt::Debug for RecordingButton {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordingButton")
            .field("recording", &self.recording)
            .field("width", &self.width())
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/recording_button_tests.rs"]
mod tests;
