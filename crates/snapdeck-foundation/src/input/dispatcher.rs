//! Pointer input dispatcher plumbing.
//!
//! Platform integrations enqueue pointer events as they arrive; the host
//! drains the queue into a [`PointerInputTarget`] once per input pass.

use super::types::{PointerEvent, PointerInputTarget};
use smallvec::SmallVec;

#[derive(Default)]
pub struct PointerDispatcher {
    queue: SmallVec<[PointerEvent; 8]>,
}

impl PointerDispatcher {
    pub fn new() -> Self {
        Self {
            queue: SmallVec::new(),
        }
    }

    pub fn push(&mut self, event: PointerEvent) {
        self.queue.push(event);
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn drain<F>(&mut self, mut handler: F)
    where
        F: FnMut(PointerEvent),
    {
        for event in self.queue.drain(..) {
            handler(event);
        }
    }

    /// Delivers queued events in arrival order. Returns how many the target
    /// acted upon.
    pub fn dispatch_to(&mut self, target: &mut dyn PointerInputTarget) -> usize {
        let mut handled = 0;
        self.drain(|event| {
            if target.on_pointer_event(&event) {
                event.consume();
                handled += 1;
            }
        });
        handled
    }
}

impl std::fmt::Debug for PointerDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PointerDispatcher")
            .field("queued", &self.queue.len())
            .finish()
    }
}
