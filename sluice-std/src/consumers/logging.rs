//! Log-and-forward consumer wrapper.

use sluice_core::{SignalConsumer, Subscription};
use std::fmt::Debug;
use std::sync::Arc;

/// A consumer that logs each signal before forwarding it to the wrapped
/// consumer.
///
/// Logging goes through `tracing` when the `tracing` feature is enabled and
/// is a no-op otherwise, so the wrapper can stay in place unconditionally.
pub struct InspectConsumer<C> {
    inner: C,
}

impl<C> InspectConsumer<C> {
    /// Wraps `inner`.
    pub fn new(inner: C) -> Self {
        Self { inner }
    }

    /// Unwraps the inner consumer.
    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<T, E, C> SignalConsumer<T, E> for InspectConsumer<C>
where
    T: Debug,
    E: Debug,
    C: SignalConsumer<T, E>,
{
    fn on_subscribe(&self, subscription: Arc<dyn Subscription>) {
        #[cfg(feature = "tracing")]
        tracing::debug!("subscribed");
        self.inner.on_subscribe(subscription);
    }

    fn on_next(&self, value: T) {
        #[cfg(feature = "tracing")]
        tracing::debug!(value = ?value, "next");
        self.inner.on_next(value);
    }

    fn on_error(&self, error: E) {
        #[cfg(feature = "tracing")]
        tracing::debug!(error = ?error, "error");
        self.inner.on_error(error);
    }

    fn on_complete(&self) {
        #[cfg(feature = "tracing")]
        tracing::debug!("complete");
        self.inner.on_complete();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{RecordingConsumer, TestFailure};

    #[test]
    fn signals_pass_through_unchanged() {
        let inspect = InspectConsumer::new(RecordingConsumer::<u32, TestFailure>::new());

        inspect.on_next(1);
        inspect.on_error(TestFailure("boom"));

        let recorder = inspect.into_inner();
        assert_eq!(recorder.values(), vec![1]);
        assert_eq!(recorder.errors(), vec![TestFailure("boom")]);
    }
}
