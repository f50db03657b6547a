//! The mutual-exclusion and drain-loop engine.
//!
//! An [`EmissionGate`] decides, for every admitted signal, whether the
//! calling thread delivers it directly (becoming the *drainer*) or appends it
//! to the mailbox for whichever thread currently holds delivery ownership.
//! The gate's lock is held only for bookkeeping, never across a call into the
//! downstream consumer: a slow consumer stalls only the drainer, while other
//! producers enqueue and return immediately.

use crate::mailbox::Mailbox;
use sluice_core::Signal;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Outcome of [`EmissionGate::admit`].
#[derive(Debug, PartialEq, Eq)]
pub enum Admission<T, E> {
    /// The calling thread won delivery ownership. It must invoke the
    /// consumer with exactly this signal, outside the gate's critical
    /// section, and then call [`EmissionGate::drain`].
    Deliver(Signal<T, E>),
    /// The gate was busy; the signal was queued for the current drainer.
    /// No delivery obligation for the caller.
    Enqueued,
    /// The stream is already terminated; the signal was discarded.
    Dropped,
}

#[derive(Debug, Default)]
struct GateFlags {
    /// True while some thread owns delivery to the consumer.
    busy: bool,
    /// Latched once a terminal signal is accepted, at admission time.
    terminated: bool,
}

/// Serializes delivery of signals toward a single downstream consumer.
///
/// The gate owns three mutually consistent pieces of state: a busy flag (is
/// some thread currently the drainer), a terminated latch (has a terminal
/// signal been accepted), and a pending [`Mailbox`]. All three are only
/// mutated inside one short-held critical section.
///
/// Re-entrancy falls out of the busy flag alone: a call made from inside the
/// consumer's own callback finds `busy` set and is queued, exactly like a
/// call from an unrelated thread. Thread identity is never consulted.
#[derive(Debug)]
pub struct EmissionGate<T, E> {
    flags: Mutex<GateFlags>,
    pending: Mailbox<T, E>,
}

impl<T, E> EmissionGate<T, E> {
    /// Creates an idle, unterminated gate.
    pub fn new() -> Self {
        Self {
            flags: Mutex::new(GateFlags::default()),
            pending: Mailbox::new(),
        }
    }

    /// Admits a signal, deciding between direct delivery, queueing, and
    /// dropping.
    ///
    /// Termination is latched at *admission* time: a terminal signal that
    /// gets queued already closes the gate to further signals, even though
    /// its delivery happens later during a drain.
    pub fn admit(&self, signal: Signal<T, E>) -> Admission<T, E> {
        let mut flags = self.lock();
        if flags.terminated {
            return Admission::Dropped;
        }
        if signal.is_terminal() {
            flags.terminated = true;
        }
        if flags.busy {
            // Lock order is always flags -> mailbox, never the reverse.
            self.pending.append(signal);
            Admission::Enqueued
        } else {
            flags.busy = true;
            Admission::Deliver(signal)
        }
    }

    /// Runs the drain loop, delivering queued signals in admission order.
    ///
    /// Must be called by the thread that received [`Admission::Deliver`],
    /// after it has delivered that signal. Each batch is delivered outside
    /// the critical section; the loop re-checks the mailbox afterwards
    /// because producers may have appended in the meantime. Ownership is
    /// released when the mailbox is observed empty while holding the gate,
    /// or immediately after a terminal signal is delivered - terminal
    /// delivery ends the drainer's responsibility unconditionally, and any
    /// remainder of the batch is discarded undelivered.
    pub fn drain<F>(&self, mut deliver: F)
    where
        F: FnMut(Signal<T, E>),
    {
        loop {
            let batch = {
                let mut flags = self.lock();
                let batch = self.pending.drain_all();
                if batch.is_empty() {
                    flags.busy = false;
                    return;
                }
                batch
            };
            for signal in batch {
                let terminal = signal.is_terminal();
                deliver(signal);
                if terminal {
                    self.lock().busy = false;
                    return;
                }
            }
        }
    }

    /// Whether a terminal signal has been accepted.
    pub fn is_terminated(&self) -> bool {
        self.lock().terminated
    }

    /// Whether some thread currently owns delivery.
    pub fn is_busy(&self) -> bool {
        self.lock().busy
    }

    // The critical sections in this module are bookkeeping only and cannot
    // panic, so a poisoned lock still holds consistent flags.
    fn lock(&self) -> MutexGuard<'_, GateFlags> {
        self.flags.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T, E> Default for EmissionGate<T, E> {
    fn default() -> Self {
        Self::new()
    }
}
