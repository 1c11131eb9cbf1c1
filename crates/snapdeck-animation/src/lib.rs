//! Animation system for Snapdeck
//!
//! [`Animatable`] drives a value toward a target on the runtime's frame clock
//! using either a timed eased curve or a damped spring. [`SnapAnimator`]
//! layers the two transition kinds the gesture controllers need on top of it:
//! *settle* (to a resting position) and *exit* (freeze, wait for the paint,
//! then fly off-screen), each reporting completion exactly once as a tagged
//! event.

mod animation;
mod snap_animator;

pub use animation::*;
pub use snap_animator::*;
