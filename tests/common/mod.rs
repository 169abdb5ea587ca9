//! Test doubles shared by the integration suite.

use std::cell::RefCell;
use std::collections::VecDeque;

/// Call-recording stand-in for a handler function.
///
/// Records every argument it is invoked with, for later assertion, and
/// answers with canned return values: a fixed value set via [`Spy::returns`],
/// or a front-to-back queue of one-shot values set via
/// [`Spy::define_returns`]. Queued values take precedence while any remain.
pub struct Spy<A, R> {
    calls: RefCell<Vec<A>>,
    fixed: Option<R>,
    queued: RefCell<VecDeque<R>>,
}

impl<A, R: Clone> Spy<A, R> {
    pub fn new() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            fixed: None,
            queued: RefCell::new(VecDeque::new()),
        }
    }

    /// Sets the value returned by every call.
    pub fn returns(mut self, value: R) -> Self {
        self.fixed = Some(value);
        self
    }

    /// Appends one-shot return values, consumed in order by later calls.
    pub fn define_returns(self, values: impl IntoIterator<Item = R>) -> Self {
        self.queued.borrow_mut().extend(values);
        self
    }

    /// Records `arg` and returns the next canned value, if any.
    pub fn call(&self, arg: A) -> Option<R> {
        self.calls.borrow_mut().push(arg);
        if let Some(next) = self.queued.borrow_mut().pop_front() {
            return Some(next);
        }
        self.fixed.clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    pub fn was_called(&self) -> bool {
        self.call_count() > 0
    }
}

impl<A: Clone, R: Clone> Spy<A, R> {
    /// Snapshot of the recorded arguments, in call order.
    pub fn calls(&self) -> Vec<A> {
        self.calls.borrow().clone()
    }
}

impl<A: PartialEq, R: Clone> Spy<A, R> {
    /// Whether any recorded call received `expected`.
    pub fn was_called_with(&self, expected: &A) -> bool {
        self.calls.borrow().iter().any(|arg| arg == expected)
    }
}
