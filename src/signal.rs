//! Level-triggered wake signal for the queue's suspend/wake protocol.
//!
//! [`Signal`] stays "ready" from the moment a producer notifies it until the
//! consumer explicitly clears it, as opposed to an edge- or count-based
//! notifier. It stores at most one waker: exactly one concurrent waiter is
//! supported, and the most recently registered one wins.
//!
//! Like everything in this crate, the signal assumes cooperative scheduling:
//! `Cell`/`RefCell` suffice because notify, clear, and register are never
//! preempted mid-call.

use std::cell::{Cell, RefCell};
use std::task::Waker;

/// Single-waiter, level-triggered notification flag.
pub(crate) struct Signal {
    set: Cell<bool>,
    waiter: RefCell<Option<Waker>>,
}

impl Signal {
    /// Creates a signal in the "not ready" state with no registered waiter.
    pub(crate) const fn new() -> Self {
        Self {
            set: Cell::new(false),
            waiter: RefCell::new(None),
        }
    }

    /// Sets the signal to "ready" and wakes the registered waiter, if any.
    ///
    /// The signal stays ready until [`Signal::clear`] is called; notifying
    /// an already-ready signal is a no-op apart from re-waking.
    pub(crate) fn notify(&self) {
        self.set.set(true);
        if let Some(waker) = self.waiter.borrow_mut().take() {
            waker.wake();
        }
    }

    /// Resets the signal to "not ready".
    ///
    /// Does not touch the registered waiter: a waiter registered after the
    /// clear is still woken by the next notify.
    pub(crate) fn clear(&self) {
        self.set.set(false);
    }

    /// Whether the signal is currently "ready".
    pub(crate) fn is_set(&self) -> bool {
        self.set.get()
    }

    /// Registers `waker` to be woken by the next notify.
    ///
    /// Replaces any previously registered waiter.
    pub(crate) fn register(&self, waker: &Waker) {
        let mut slot = self.waiter.borrow_mut();
        match slot.as_mut() {
            // clone_from skips the clone when the old waker would wake the
            // same task.
            Some(existing) => existing.clone_from(waker),
            None => *slot = Some(waker.clone()),
        }
    }
}
