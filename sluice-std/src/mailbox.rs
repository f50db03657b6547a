//! Transient signal queue used while the gate is busy.

use sluice_core::Signal;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// An unbounded FIFO of signals awaiting delivery.
///
/// Signals leave in the exact order they were appended. A drain swaps the
/// entire backlog out in one step, so concurrent appenders never observe a
/// half-drained queue.
///
/// The mailbox is not a flow-control buffer: it holds signals only for the
/// window in which some other thread owns delivery, and it has no capacity
/// bound. Producers are expected to be rate-limited by a layer above the
/// gateway.
#[derive(Debug)]
pub struct Mailbox<T, E> {
    queue: Mutex<Vec<Signal<T, E>>>,
}

impl<T, E> Mailbox<T, E> {
    /// Creates an empty mailbox.
    pub fn new() -> Self {
        Self {
            queue: Mutex::new(Vec::new()),
        }
    }

    /// Appends a signal. O(1) amortized; the critical section is bounded.
    pub fn append(&self, signal: Signal<T, E>) {
        self.lock().push(signal);
    }

    /// Removes and returns the entire backlog in append order, leaving the
    /// mailbox empty. Safe to call concurrently with `append`.
    pub fn drain_all(&self) -> Vec<Signal<T, E>> {
        std::mem::take(&mut *self.lock())
    }

    /// Whether the mailbox is currently empty.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Number of signals currently queued.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    // The critical sections above cannot panic, so a poisoned lock still
    // holds a consistent queue.
    fn lock(&self) -> MutexGuard<'_, Vec<Signal<T, E>>> {
        self.queue.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T, E> Default for Mailbox<T, E> {
    fn default() -> Self {
        Self::new()
    }
}
