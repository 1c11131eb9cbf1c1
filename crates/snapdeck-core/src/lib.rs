//! Core runtime for Snapdeck
//!
//! Everything in Snapdeck happens on one thread, driven by discrete pointer
//! events and by frame callbacks. This crate owns the frame side: a
//! [`Runtime`] that queues per-frame callbacks, a [`FrameClock`] to register
//! them, [`FrameBarrier`] for "wait N painted frames" sequencing, and the
//! [`EventQueue`] mailbox animation drivers use to hand completion events back
//! to their controller.

mod event_queue;
mod frame_clock;
mod platform;
mod runtime;

pub use event_queue::EventQueue;
pub use frame_clock::{FrameBarrier, FrameCallbackRegistration, FrameClock};
pub use platform::{HapticFeedback, NoHaptics, RuntimeScheduler};
pub use runtime::{DefaultScheduler, FrameCallbackId, Runtime, RuntimeHandle};

pub mod prelude {
    pub use crate::{
        EventQueue, FrameBarrier, FrameClock, HapticFeedback, NoHaptics, Runtime, RuntimeHandle,
    };
}

#[cfg(test)]
#[path = "tests/frame_clock_tests.rs"]
mod tests;
