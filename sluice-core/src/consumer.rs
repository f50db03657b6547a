//! Consumer capability seam.
//!
//! [`SignalConsumer`] is the downstream side of the gateway: the capability
//! set {subscribe, next, error, complete} that producers ultimately reach.
//! The serializing facade in `sluice-std` implements this same trait, so a
//! serialized consumer is a drop-in replacement for the consumer it wraps.

use crate::signal::Signal;
use crate::subscription::Subscription;
use std::sync::Arc;

/// A consumer of stream signals.
///
/// All methods take `&self`: consumers are shared across producer threads and
/// may be re-entered from their own callbacks, so interior mutability is the
/// implementor's responsibility.
///
/// # Contract
///
/// Callbacks must not panic under normal operation. A panic inside a callback
/// is a precondition violation: it propagates on whichever thread happens to
/// be delivering at that moment, and the gateway makes no attempt to catch or
/// recover from it. Callers that need isolation from a panicking consumer
/// must wrap it in a safety layer before handing it to the gateway.
///
/// Well-behaved callers invoke `on_subscribe` once, before any signal, and at
/// most one of `on_error` / `on_complete` over the consumer's lifetime. The
/// serializing facade enforces the latter toward the consumer it wraps, no
/// matter how disorderly its own callers are.
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `SignalConsumer<{T}, {E}>`",
    label = "missing `SignalConsumer` implementation",
    note = "SignalConsumers must accept next-values of type `{T}` and failures of type `{E}`."
)]
pub trait SignalConsumer<T, E>: Send + Sync {
    /// Called once with the upstream handle, before any signal.
    fn on_subscribe(&self, subscription: Arc<dyn Subscription>);

    /// Called for each next-value.
    fn on_next(&self, value: T);

    /// Called with the failure that ended the stream. Terminal.
    fn on_error(&self, error: E);

    /// Called when the stream ended successfully. Terminal.
    fn on_complete(&self);

    /// Dispatches a [`Signal`] to the matching callback.
    fn on_signal(&self, signal: Signal<T, E>) {
        match signal {
            Signal::Next(value) => self.on_next(value),
            Signal::Error(error) => self.on_error(error),
            Signal::Complete => self.on_complete(),
        }
    }
}

// Forwarding impls so shared and boxed consumers can be used directly.
impl<T, E, C: SignalConsumer<T, E> + ?Sized> SignalConsumer<T, E> for Arc<C> {
    fn on_subscribe(&self, subscription: Arc<dyn Subscription>) {
        (**self).on_subscribe(subscription);
    }

    fn on_next(&self, value: T) {
        (**self).on_next(value);
    }

    fn on_error(&self, error: E) {
        (**self).on_error(error);
    }

    fn on_complete(&self) {
        (**self).on_complete();
    }
}

impl<T, E, C: SignalConsumer<T, E> + ?Sized> SignalConsumer<T, E> for Box<C> {
    fn on_subscribe(&self, subscription: Arc<dyn Subscription>) {
        (**self).on_subscribe(subscription);
    }

    fn on_next(&self, value: T) {
        (**self).on_next(value);
    }

    fn on_error(&self, error: E) {
        (**self).on_error(error);
    }

    fn on_complete(&self) {
        (**self).on_complete();
    }
}
