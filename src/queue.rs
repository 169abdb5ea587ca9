//! Bounded async queue over the ring core.
//!
//! # Overview
//!
//! - [`Queue`] - a cloneable handle to a shared fixed-capacity buffer.
//! - [`Queue::insert`] - synchronous, never suspends, never fails. A full
//!   buffer evicts its oldest unread item instead of rejecting the insert.
//! - [`Queue::take`] - suspending: waits for an insert when the buffer is
//!   empty. The [`Stream`] implementation exposes the same operation as an
//!   infinite FIFO sequence.
//!
//! # Example
//!
//! ```
//! use spillway::Queue;
//!
//! futures::executor::block_on(async {
//!     let queue = Queue::new(4);
//!
//!     for i in 1..=6 {
//!         queue.insert(i);
//!     }
//!
//!     // Capacity is 4: the two oldest items were discarded.
//!     assert_eq!(queue.discard_count(), 2);
//!     assert_eq!(queue.take().await, 3);
//! });
//! ```
//!
//! # Single consumer
//!
//! Any number of tasks may hold clones of a [`Queue`] and call
//! [`Queue::insert`]. Only one task may await [`Queue::take`] (or poll the
//! stream) at a time: the wake signal stores a single waker, so with two
//! suspended consumers only the most recently registered one is woken.

use std::cell::RefCell;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::task::{Context, Poll};

use futures_core::Stream;

use crate::ring::Ring;
use crate::signal::Signal;
use crate::trace::{debug, trace};

/// State shared between all clones of a [`Queue`].
struct Shared<T> {
    ring: RefCell<Ring<T>>,

    /// Set by every insert, cleared by the consumer before suspending.
    added: Signal,
}

/// Handle to a bounded async queue with overwrite-oldest eviction.
///
/// Cloning is cheap and shares the same buffer. The handle is `!Send`: the
/// queue belongs to a single cooperative scheduler, where interior
/// mutability replaces locking because no operation suspends mid-mutation.
pub struct Queue<T> {
    shared: Rc<Shared<T>>,
}

impl<T> Clone for Queue<T> {
    fn clone(&self) -> Self {
        Self {
            shared: Rc::clone(&self.shared),
        }
    }
}

impl<T> Queue<T> {
    /// Creates a queue that buffers up to `max(capacity, 3)` items.
    ///
    /// Capacities below three are silently clamped up, never rejected; a
    /// capacity of zero is accepted.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            shared: Rc::new(Shared {
                ring: RefCell::new(Ring::with_capacity(capacity)),
                added: Signal::new(),
            }),
        }
    }

    /// Inserts `value`, evicting the oldest unread item if the queue is full.
    ///
    /// Completes synchronously in every case: the producer is never blocked
    /// and never sees an error. A suspended consumer is woken to run on the
    /// next scheduler turn. Each overflowing insert discards exactly one
    /// item, counted by [`Queue::discard_count`].
    pub fn insert(&self, value: T) {
        let evicted = self.shared.ring.borrow_mut().push_evict(value);
        self.shared.added.notify();
        if evicted {
            debug!("queue full: discarded the oldest unread item");
        }
    }

    /// Whether the queue holds no unread items. Never mutates state.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shared.ring.borrow().is_empty()
    }

    /// Number of unread items currently buffered.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shared.ring.borrow().len()
    }

    /// Maximum number of items the queue can hold before evicting.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.shared.ring.borrow().capacity()
    }

    /// Total number of items discarded by evicting inserts.
    ///
    /// Monotonically non-decreasing over the life of the queue.
    #[must_use]
    pub fn discard_count(&self) -> u64 {
        self.shared.ring.borrow().discards()
    }

    /// Removes and returns the oldest item, suspending while the queue is
    /// empty.
    ///
    /// Cancellation-safe: dropping the future before it completes removes
    /// nothing from the queue and leaves its state intact.
    #[must_use = "futures do nothing unless polled"]
    pub fn take(&self) -> Take<'_, T> {
        Take { queue: self }
    }

    /// Shared poll logic for [`Take`] and the [`Stream`] implementation.
    ///
    /// The emptiness check, the signal clear, and the waker registration
    /// all happen inside this single non-suspending poll, so a producer's
    /// notify can never fall between them and go missing.
    fn poll_take(&self, cx: &mut Context<'_>) -> Poll<T> {
        if let Some(value) = self.shared.ring.borrow_mut().pop() {
            return Poll::Ready(value);
        }

        // Empty: clear-then-wait. The next insert sets the signal and wakes
        // this task.
        self.shared.added.clear();
        self.shared.added.register(cx.waker());
        trace!("consumer suspended on empty queue");
        Poll::Pending
    }
}

/// Future returned by [`Queue::take`].
#[must_use = "futures do nothing unless polled"]
pub struct Take<'a, T> {
    queue: &'a Queue<T>,
}

impl<T> Future for Take<'_, T> {
    type Output = T;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<T> {
        self.queue.poll_take(cx)
    }
}

/// The queue as an infinite FIFO sequence.
///
/// `poll_next` never yields `None`: an exhausted queue simply waits for the
/// next insert, so a consumer can drain it in a loop indefinitely.
impl<T> Stream for Queue<T> {
    type Item = T;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<T>> {
        self.poll_take(cx).map(Some)
    }
}
