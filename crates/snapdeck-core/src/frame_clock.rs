use crate::runtime::RuntimeHandle;
use crate::FrameCallbackId;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone, Debug)]
pub struct FrameClock {
    runtime: RuntimeHandle,
}

impl FrameClock {
    pub fn new(runtime: RuntimeHandle) -> Self {
        Self { runtime }
    }

    pub fn runtime_handle(&self) -> RuntimeHandle {
        self.runtime.clone()
    }

    pub fn with_frame_nanos(
        &self,
        callback: impl FnOnce(u64) + 'static,
    ) -> FrameCallbackRegistration {
        match self.runtime.register_frame_callback(callback) {
            Some(id) => FrameCallbackRegistration::new(self.runtime.clone(), id),
            None => FrameCallbackRegistration::inactive(self.runtime.clone()),
        }
    }

    pub fn with_frame_millis(
        &self,
        callback: impl FnOnce(u64) + 'static,
    ) -> FrameCallbackRegistration {
        self.with_frame_nanos(move |nanos| {
            let millis = nanos / 1_000_000;
            callback(millis);
        })
    }

    /// Runs `callback` on the `frames`-th frame boundary from now.
    ///
    /// Each boundary is a separate drain of the runtime, so a style change
    /// made before the barrier is guaranteed to have been painted by the time
    /// `callback` runs. `frames` is at least one.
    pub fn with_frame_barrier(
        &self,
        frames: u32,
        callback: impl FnOnce(u64) + 'static,
    ) -> FrameBarrier {
        let state = Rc::new(RefCell::new(BarrierState {
            registration: None,
            remaining: frames.max(1),
            callback: Some(Box::new(callback)),
        }));
        FrameBarrier::arm(self, &state);
        FrameBarrier { state }
    }
}

pub struct FrameCallbackRegistration {
    runtime: RuntimeHandle,
    id: Option<FrameCallbackId>,
}

impl FrameCallbackRegistration {
    fn new(runtime: RuntimeHandle, id: FrameCallbackId) -> Self {
        Self {
            runtime,
            id: Some(id),
        }
    }

    fn inactive(runtime: RuntimeHandle) -> Self {
        Self { runtime, id: None }
    }

    pub fn is_active(&self) -> bool {
        self.id.is_some()
    }

    pub fn cancel(mut self) {
        if let Some(id) = self.id.take() {
            self.runtime.cancel_frame_callback(id);
        }
    }
}

impl Drop for FrameCallbackRegistration {
    fn drop(&mut self) {
        if let Some(id) = self.id.take() {
            self.runtime.cancel_frame_callback(id);
        }
    }
}

impl std::fmt::Debug for FrameCallbackRegistration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrameCallbackRegistration")
            .field("id", &self.id)
            .finish()
    }
}

struct BarrierState {
    registration: Option<FrameCallbackRegistration>,
    remaining: u32,
    callback: Option<Box<dyn FnOnce(u64) + 'static>>,
}

/// Pending "after N frames" callback. Dropping the barrier cancels it.
pub struct FrameBarrier {
    state: Rc<RefCell<BarrierState>>,
}

impl FrameBarrier {
    fn arm(clock: &FrameClock, state: &Rc<RefCell<BarrierState>>) {
        let weak = Rc::downgrade(state);
        let next_clock = clock.clone();
        let registration = clock.with_frame_nanos(move |time| {
            let Some(state) = weak.upgrade() else {
                return;
            };
            let fire = {
                let mut barrier = state.borrow_mut();
                // The callback has already been dequeued; forget the id.
                if let Some(mut registration) = barrier.registration.take() {
                    registration.id = None;
                }
                barrier.remaining = barrier.remaining.saturating_sub(1);
                if barrier.remaining == 0 {
                    barrier.callback.take()
                } else {
                    None
                }
            };
            match fire {
                Some(callback) => callback(time),
                None => {
                    let rearm = {
                        let barrier = state.borrow();
                        barrier.remaining > 0 && barrier.callback.is_some()
                    };
                    if rearm {
                        FrameBarrier::arm(&next_clock, &state);
                    }
                }
            }
        });
        state.borrow_mut().registration = Some(registration);
    }

    /// True until the callback has run.
    pub fn is_pending(&self) -> bool {
        self.state.borrow().callback.is_some()
    }

    /// Frame boundaries still to pass before the callback runs.
    pub fn remaining_frames(&self) -> u32 {
        let state = self.state.borrow();
        if state.callback.is_some() {
            state.remaining
        } else {
            0
        }
    }

    pub fn cancel(self) {
        drop(self);
    }
}

impl Drop for FrameBarrier {
    fn drop(&mut self) {
        if let Ok(mut state) = self.state.try_borrow_mut() {
            state.callback = None;
            state.registration.take();
        }
    }
}

impl std::fmt::Debug for FrameBarrier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrameBarrier")
            .field("remaining_frames", &self.remaining_frames())
            .finish()
    }
}
