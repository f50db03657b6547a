//! Testing utilities for Sluice.
//!
//! This module provides reusable harness pieces for exercising a gateway
//! under contention:
//!
//! - [`RecordingConsumer`]: records every signal in order and can check the
//!   recorded sequence against the serialized protocol
//! - [`CountingConsumer`]: atomic counters only, for high-volume workloads
//!   and benchmarks
//! - [`FlagSubscription`]: an inert upstream handle with a latched cancel
//!   flag
//! - [`TestFailure`]: a small failure payload for `Signal::Error`

use sluice_core::{ProtocolViolation, Signal, SignalConsumer, Subscription};
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicBool, AtomicUsize, Ordering},
};
use std::thread;
use std::time::Duration;
use thiserror::Error;

// ============================================================================
// Failure payload
// ============================================================================

/// Failure payload used by harness consumers and tests.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{0}")]
pub struct TestFailure(pub &'static str);

// ============================================================================
// Flag subscription
// ============================================================================

/// An inert upstream handle that latches its cancel flag.
///
/// The counterpart of the boolean subscription used by the original harness:
/// it produces nothing and only remembers whether `cancel` was called.
#[derive(Debug, Default)]
pub struct FlagSubscription {
    cancelled: AtomicBool,
}

impl FlagSubscription {
    /// Creates an uncancelled subscription.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `cancel` has been called at least once.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

impl Subscription for FlagSubscription {
    fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }
}

// ============================================================================
// Recording consumer
// ============================================================================

/// A consumer that records every signal it receives, in delivery order.
///
/// Alongside the event log it tracks how many threads were inside one of its
/// callbacks at once; a serialized gateway must never let that exceed 1.
/// An optional dwell makes each callback linger, widening race windows the
/// way the original harness's busy consumer did.
///
/// # Example
///
/// ```rust,ignore
/// let gateway = Serialized::new(RecordingConsumer::<u32, TestFailure>::new());
/// // ... feed it from several threads ...
/// assert_eq!(gateway.downstream().max_in_flight(), 1);
/// assert_eq!(gateway.downstream().verify(), Ok(expected_next_count));
/// ```
#[derive(Debug)]
pub struct RecordingConsumer<T, E> {
    events: Mutex<Vec<Signal<T, E>>>,
    subscriptions: AtomicUsize,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
    dwell: Option<Duration>,
}

impl<T, E> RecordingConsumer<T, E> {
    /// Creates a recorder whose callbacks return immediately.
    pub fn new() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
            subscriptions: AtomicUsize::new(0),
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
            dwell: None,
        }
    }

    /// Creates a recorder whose callbacks sleep for `dwell` while counted as
    /// in-flight.
    pub fn with_dwell(dwell: Duration) -> Self {
        Self {
            dwell: Some(dwell),
            ..Self::new()
        }
    }

    /// Number of times `on_subscribe` was called.
    pub fn subscription_count(&self) -> usize {
        self.subscriptions.load(Ordering::SeqCst)
    }

    /// Number of recorded next-values.
    pub fn next_count(&self) -> usize {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter(|event| event.is_next())
            .count()
    }

    /// Whether a completion signal was recorded.
    pub fn is_completed(&self) -> bool {
        self.events
            .lock()
            .unwrap()
            .iter()
            .any(|event| matches!(event, Signal::Complete))
    }

    /// Highest number of threads observed inside a callback at one instant.
    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    /// Checks the recorded sequence against the serialized protocol and
    /// returns the number of next-values on success.
    pub fn verify(&self) -> Result<usize, ProtocolViolation> {
        let events = self.events.lock().unwrap();
        let mut next_count = 0;
        let mut finished = false;
        for event in events.iter() {
            if event.is_terminal() {
                if finished {
                    return Err(ProtocolViolation::SecondTerminal);
                }
                finished = true;
            } else {
                if finished {
                    return Err(ProtocolViolation::NextAfterTerminal);
                }
                next_count += 1;
            }
        }
        Ok(next_count)
    }

    fn record(&self, signal: Signal<T, E>) {
        let depth = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(depth, Ordering::SeqCst);
        self.events.lock().unwrap().push(signal);
        if let Some(dwell) = self.dwell {
            thread::sleep(dwell);
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
    }
}

impl<T: Clone, E: Clone> RecordingConsumer<T, E> {
    /// A copy of the recorded signals, in delivery order.
    pub fn events(&self) -> Vec<Signal<T, E>> {
        self.events.lock().unwrap().clone()
    }
}

impl<T: Clone, E> RecordingConsumer<T, E> {
    /// The recorded next-value payloads, in delivery order.
    pub fn values(&self) -> Vec<T> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter_map(|event| match event {
                Signal::Next(value) => Some(value.clone()),
                _ => None,
            })
            .collect()
    }
}

impl<T, E: Clone> RecordingConsumer<T, E> {
    /// The recorded failure payloads, in delivery order.
    pub fn errors(&self) -> Vec<E> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter_map(|event| match event {
                Signal::Error(error) => Some(error.clone()),
                _ => None,
            })
            .collect()
    }
}

impl<T, E> Default for RecordingConsumer<T, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Send, E: Send> SignalConsumer<T, E> for RecordingConsumer<T, E> {
    fn on_subscribe(&self, _subscription: Arc<dyn Subscription>) {
        self.subscriptions.fetch_add(1, Ordering::SeqCst);
    }

    fn on_next(&self, value: T) {
        self.record(Signal::Next(value));
    }

    fn on_error(&self, error: E) {
        self.record(Signal::Error(error));
    }

    fn on_complete(&self) {
        self.record(Signal::Complete);
    }
}

// ============================================================================
// Counting consumer
// ============================================================================

/// A consumer that only counts, accepting any payload types.
///
/// Useful where recording every signal would dominate the workload, such as
/// benchmarks and very high-volume conservation checks.
#[derive(Debug, Default)]
pub struct CountingConsumer {
    next: AtomicUsize,
    errors: AtomicUsize,
    completions: AtomicUsize,
    subscriptions: AtomicUsize,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl CountingConsumer {
    /// Creates a consumer with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of next-values received.
    pub fn next_count(&self) -> usize {
        self.next.load(Ordering::SeqCst)
    }

    /// Number of error signals received.
    pub fn error_count(&self) -> usize {
        self.errors.load(Ordering::SeqCst)
    }

    /// Number of completion signals received.
    pub fn completion_count(&self) -> usize {
        self.completions.load(Ordering::SeqCst)
    }

    /// Number of times `on_subscribe` was called.
    pub fn subscription_count(&self) -> usize {
        self.subscriptions.load(Ordering::SeqCst)
    }

    /// Number of terminal signals received.
    pub fn terminal_count(&self) -> usize {
        self.error_count() + self.completion_count()
    }

    /// Highest number of threads observed inside a callback at one instant.
    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    fn enter(&self) {
        let depth = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(depth, Ordering::SeqCst);
    }

    fn exit(&self) {
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
    }
}

impl<T, E> SignalConsumer<T, E> for CountingConsumer {
    fn on_subscribe(&self, _subscription: Arc<dyn Subscription>) {
        self.subscriptions.fetch_add(1, Ordering::SeqCst);
    }

    fn on_next(&self, _value: T) {
        self.enter();
        self.next.fetch_add(1, Ordering::SeqCst);
        self.exit();
    }

    fn on_error(&self, _error: E) {
        self.enter();
        self.errors.fetch_add(1, Ordering::SeqCst);
        self.exit();
    }

    fn on_complete(&self) {
        self.enter();
        self.completions.fetch_add(1, Ordering::SeqCst);
        self.exit();
    }
}
