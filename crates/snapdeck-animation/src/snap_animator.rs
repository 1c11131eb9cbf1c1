use std::cell::Cell;
use std::rc::Rc;

use snapdeck_core::{EventQueue, FrameBarrier, FrameClock, RuntimeHandle};

use crate::animation::{Animatable, AnimationType, AnimationValue};

/// Frames an exit waits, with the card frozen at its release position,
/// before the transition starts. One frame to paint the frozen position and
/// one for the transition style to take effect.
pub const EXIT_ARMING_FRAMES: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapPhase {
    /// Resting at the current value; nothing scheduled.
    Idle,
    /// Animating toward a resting position.
    Settling,
    /// Frozen at the release position, waiting for the exit transition to arm.
    ExitArming,
    /// Flying off-screen.
    Exiting,
}

/// Drives one animated offset through settle and exit transitions.
///
/// Each transition is started with a tag; when it runs to completion the tag
/// is pushed onto an internal queue that the owner drains with
/// [`SnapAnimator::drain_completed`]. Starting another transition, jumping or
/// interrupting cancels the current one and discards any tag still waiting
/// to be drained, so only the latest transition can ever report.
pub struct SnapAnimator<T: AnimationValue + 'static, E: 'static> {
    animatable: Animatable<T>,
    clock: FrameClock,
    completed: EventQueue<E>,
    barrier: Option<FrameBarrier>,
    phase: Rc<Cell<SnapPhase>>,
}

impl<T: AnimationValue + 'static, E: 'static> SnapAnimator<T, E> {
    pub fn new(initial: T, runtime: RuntimeHandle) -> Self {
        Self {
            animatable: Animatable::new(initial, runtime.clone()),
            clock: runtime.frame_clock(),
            completed: EventQueue::new(),
            barrier: None,
            phase: Rc::new(Cell::new(SnapPhase::Idle)),
        }
    }

    pub fn value(&self) -> T {
        self.animatable.value()
    }

    /// Where the current transition is heading.
    pub fn target(&self) -> T {
        self.animatable.target()
    }

    pub fn phase(&self) -> SnapPhase {
        self.phase.get()
    }

    pub fn is_animating(&self) -> bool {
        self.phase.get() != SnapPhase::Idle
    }

    /// Moves to `value` immediately, cancelling whatever was in flight.
    pub fn jump_to(&mut self, value: T) {
        self.interrupt();
        self.animatable.snap_to(value);
    }

    /// Animates from the current value to `target`.
    ///
    /// `velocity` is the release velocity in value units per second toward
    /// the target; only springs use it.
    pub fn settle(&mut self, target: T, animation: AnimationType, velocity: f32, tag: E) {
        self.barrier = None;
        self.completed.clear();
        self.phase.set(SnapPhase::Settling);
        let phase = Rc::clone(&self.phase);
        let completed = self.completed.clone();
        self.animatable.animate(target, animation, velocity, move |_| {
            phase.set(SnapPhase::Idle);
            completed.push(tag);
        });
    }

    /// Freezes at `from`, waits [`EXIT_ARMING_FRAMES`] frames, then animates
    /// to `off_screen`.
    pub fn exit(&mut self, from: T, off_screen: T, animation: AnimationType, tag: E) {
        self.interrupt();
        self.animatable.snap_to(from);
        self.phase.set(SnapPhase::ExitArming);

        let mut animatable = self.animatable.clone();
        let phase = Rc::clone(&self.phase);
        let completed = self.completed.clone();
        self.barrier = Some(
            self.clock
                .with_frame_barrier(EXIT_ARMING_FRAMES, move |_| {
                    log::trace!("exit armed");
                    phase.set(SnapPhase::Exiting);
                    let done_phase = Rc::clone(&phase);
                    animatable.animate(off_screen, animation, 0.0, move |_| {
                        done_phase.set(SnapPhase::Idle);
                        completed.push(tag);
                    });
                }),
        );
    }

    /// Stops at the current value and returns it. Nothing is reported for
    /// the interrupted transition, even if it finished but was not drained.
    pub fn interrupt(&mut self) -> T {
        self.barrier = None;
        self.completed.clear();
        self.phase.set(SnapPhase::Idle);
        self.animatable.stop()
    }

    /// Tags of transitions that finished since the last call, oldest first.
    pub fn drain_completed(&self) -> Vec<E> {
        self.completed.drain()
    }
}

impl<T, E> std::fmt::Debug for SnapAnimator<T, E>
where
    T: AnimationValue + std::fmt::Debug + 'static,
    E: 'static,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SnapAnimator")
            .field("value", &self.animatable.value())
            .field("phase", &self.phase.get())
            .field("pending_events", &self.completed.len())
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/snap_animator_tests.rs"]
mod tests;
