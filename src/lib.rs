//! Bounded async queue with overwrite-oldest eviction.
//!
//! `spillway` decouples synchronous producers from a single asynchronous
//! consumer running on a cooperative (single-threaded) scheduler. Inserts
//! never suspend and never fail: when the buffer is full, the oldest unread
//! item is discarded and a counter records the loss. The consumer drains
//! the queue through a suspending [`Queue::take`] operation or the
//! [`futures_core::Stream`] implementation.
//!
//! # Example
//!
//! ```
//! use spillway::Queue;
//!
//! futures::executor::block_on(async {
//!     let queue = Queue::new(4);
//!
//!     queue.insert("first");
//!     queue.insert("second");
//!
//!     assert_eq!(queue.take().await, "first");
//!     assert_eq!(queue.take().await, "second");
//!     assert!(queue.is_empty());
//! });
//! ```
//!
//! # Scheduling model
//!
//! The queue is built for cooperative multitasking: handles are `!Send` and
//! state is guarded by interior mutability rather than locks, because no
//! operation is preempted mid-execution. Any number of producer tasks may
//! hold clones of a [`Queue`]; at most one task may await [`Queue::take`]
//! at a time.

pub mod queue;
pub(crate) mod ring;
pub(crate) mod signal;

mod trace;

pub use queue::{Queue, Take};
pub use trace::init_tracing;
