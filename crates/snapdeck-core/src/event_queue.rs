use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

/// Single-threaded FIFO mailbox.
///
/// Frame callbacks push into a clone of the queue; the owning controller
/// drains it synchronously after the host has pumped a frame. Cloning the
/// queue clones the handle, not the contents.
pub struct EventQueue<E> {
    inner: Rc<RefCell<VecDeque<E>>>,
}

impl<E> EventQueue<E> {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(VecDeque::new())),
        }
    }

    pub fn push(&self, event: E) {
        self.inner.borrow_mut().push_back(event);
    }

    pub fn pop(&self) -> Option<E> {
        self.inner.borrow_mut().pop_front()
    }

    /// Removes and returns every queued event in arrival order.
    pub fn drain(&self) -> Vec<E> {
        self.inner.borrow_mut().drain(..).collect()
    }

    pub fn clear(&self) {
        self.inner.borrow_mut().clear();
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.borrow().is_empty()
    }
}

impl<E> Clone for EventQueue<E> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<E> Default for EventQueue<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: fmt::Debug> fmt::Debug for EventQueue<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.inner.borrow().iter()).finish()
    }
}
