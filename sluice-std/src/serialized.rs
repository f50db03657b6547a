//! Serializing facade over a downstream consumer.

use crate::gate::{Admission, EmissionGate};
use sluice_core::{Signal, SignalConsumer, Subscription};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Wraps a consumer so that any number of threads may feed it signals
/// concurrently - or re-entrantly from inside its own callbacks - while the
/// consumer itself observes a well-formed, strictly serialized sequence:
/// zero or more next-values followed by at most one terminal signal.
///
/// `Serialized<T, E, C>` implements [`SignalConsumer`] itself, so it is a
/// drop-in replacement for the consumer it wraps. Producers typically share
/// it behind an [`Arc`]:
///
/// ```rust,ignore
/// let gateway = Arc::new(Serialized::new(my_consumer));
/// for _ in 0..8 {
///     let gateway = Arc::clone(&gateway);
///     thread::spawn(move || gateway.on_next(compute()));
/// }
/// gateway.on_complete();
/// ```
///
/// # Guarantees
///
/// - never more than one thread inside a wrapped callback at a time
/// - submission order is preserved among signals contending for the same
///   busy window; which racing thread wins an idle gate is unspecified
/// - exactly one terminal signal is delivered; everything after it is
///   silently dropped, and producers always get a normal return
///
/// # Failure semantics
///
/// A panic raised by a wrapped callback is a precondition violation. It
/// propagates on whichever thread was delivering - possibly a producer
/// thread that merely happened to win delivery ownership - and the gateway
/// does not catch it or repair its own state afterwards.
pub struct Serialized<T, E, C> {
    downstream: C,
    gate: EmissionGate<T, E>,
    subscribed: AtomicBool,
}

impl<T, E, C> Serialized<T, E, C>
where
    C: SignalConsumer<T, E>,
{
    /// Wraps `downstream` in a fresh gateway.
    pub fn new(downstream: C) -> Self {
        Self {
            downstream,
            gate: EmissionGate::new(),
            subscribed: AtomicBool::new(false),
        }
    }

    /// The wrapped consumer.
    pub fn downstream(&self) -> &C {
        &self.downstream
    }

    /// Unwraps the facade, returning the wrapped consumer.
    pub fn into_inner(self) -> C {
        self.downstream
    }

    /// Whether a terminal signal has been accepted. Once true the gateway is
    /// inert: every further signal is dropped.
    pub fn is_terminated(&self) -> bool {
        self.gate.is_terminated()
    }

    fn accept(&self, signal: Signal<T, E>) {
        match self.gate.admit(signal) {
            Admission::Deliver(signal) => {
                self.downstream.on_signal(signal);
                self.gate.drain(|queued| self.downstream.on_signal(queued));
            }
            Admission::Enqueued | Admission::Dropped => {}
        }
    }
}

impl<T, E, C> SignalConsumer<T, E> for Serialized<T, E, C>
where
    T: Send,
    E: Send,
    C: SignalConsumer<T, E>,
{
    /// Forwards the handshake directly to the wrapped consumer, exactly
    /// once and without serialization: there is only ever one subscription
    /// handshake, so late duplicates are a caller error and are dropped.
    fn on_subscribe(&self, subscription: Arc<dyn Subscription>) {
        if self.subscribed.swap(true, Ordering::AcqRel) {
            #[cfg(feature = "tracing")]
            tracing::warn!("duplicate subscription dropped by serializing gateway");
            return;
        }
        self.downstream.on_subscribe(subscription);
    }

    fn on_next(&self, value: T) {
        self.accept(Signal::Next(value));
    }

    fn on_error(&self, error: E) {
        self.accept(Signal::Error(error));
    }

    fn on_complete(&self) {
        self.accept(Signal::Complete);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FlagSubscription, RecordingConsumer, TestFailure};

    type Recorder = RecordingConsumer<u32, TestFailure>;

    #[test]
    fn values_then_complete_reach_the_consumer_in_order() {
        let gateway = Serialized::<u32, TestFailure, _>::new(Recorder::new());

        gateway.on_next(1);
        gateway.on_next(2);
        gateway.on_next(3);
        gateway.on_complete();

        let recorder = gateway.downstream();
        assert_eq!(recorder.values(), vec![1, 2, 3]);
        assert!(recorder.is_completed());
        assert_eq!(recorder.errors(), Vec::<TestFailure>::new());
        assert_eq!(recorder.verify(), Ok(3));
    }

    #[test]
    fn signals_after_a_terminal_are_silent_no_ops() {
        let gateway = Serialized::<u32, TestFailure, _>::new(Recorder::new());

        gateway.on_next(1);
        gateway.on_error(TestFailure("boom"));
        assert!(gateway.is_terminated());

        gateway.on_next(2);
        gateway.on_complete();
        gateway.on_error(TestFailure("late"));

        let recorder = gateway.downstream();
        assert_eq!(recorder.values(), vec![1]);
        assert_eq!(recorder.errors(), vec![TestFailure("boom")]);
        assert!(!recorder.is_completed());
        assert_eq!(recorder.verify(), Ok(1));
    }

    #[test]
    fn subscription_is_forwarded_exactly_once() {
        let gateway = Serialized::<u32, TestFailure, _>::new(Recorder::new());
        let first = Arc::new(FlagSubscription::new());
        let second = Arc::new(FlagSubscription::new());

        gateway.on_subscribe(first.clone());
        gateway.on_subscribe(second.clone());

        assert_eq!(gateway.downstream().subscription_count(), 1);
        // The dropped duplicate is not cancelled either; cancellation wiring
        // is outside the gateway's scope.
        assert!(!second.is_cancelled());
    }

    #[test]
    fn into_inner_returns_the_wrapped_consumer() {
        let gateway = Serialized::<u32, TestFailure, _>::new(Recorder::new());
        gateway.on_next(7);
        let recorder = gateway.into_inner();
        assert_eq!(recorder.values(), vec![7]);
    }

    #[test]
    fn absent_payloads_are_forwarded_as_distinct_next_values() {
        let gateway =
            Serialized::<Option<u32>, TestFailure, _>::new(RecordingConsumer::new());

        gateway.on_next(Some(1));
        gateway.on_next(None);
        gateway.on_complete();

        let recorder = gateway.downstream();
        assert_eq!(recorder.values(), vec![Some(1), None]);
        assert_eq!(recorder.verify(), Ok(2));
    }
}
