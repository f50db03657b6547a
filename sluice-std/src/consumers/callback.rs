//! Closure-backed consumer.

use sluice_core::{SignalConsumer, Subscription};
use std::sync::Arc;

type SubscribeFn = Box<dyn Fn(Arc<dyn Subscription>) + Send + Sync>;
type NextFn<T> = Box<dyn Fn(T) + Send + Sync>;
type ErrorFn<E> = Box<dyn Fn(E) + Send + Sync>;
type CompleteFn = Box<dyn Fn() + Send + Sync>;

/// A consumer assembled from closures.
///
/// Callbacks that were not supplied are inert, so a caller can react to just
/// the signals it cares about:
///
/// ```rust,ignore
/// let consumer = CallbackConsumer::<u32, BoxError>::new()
///     .on_next_fn(|value| println!("got {value}"))
///     .on_complete_fn(|| println!("done"));
/// let gateway = Serialized::new(consumer);
/// ```
pub struct CallbackConsumer<T, E> {
    subscribe: Option<SubscribeFn>,
    next: Option<NextFn<T>>,
    error: Option<ErrorFn<E>>,
    complete: Option<CompleteFn>,
}

impl<T, E> CallbackConsumer<T, E> {
    /// Creates a consumer that ignores every signal.
    pub fn new() -> Self {
        Self {
            subscribe: None,
            next: None,
            error: None,
            complete: None,
        }
    }

    /// Sets the subscription-handshake callback.
    pub fn on_subscribe_fn<F>(mut self, f: F) -> Self
    where
        F: Fn(Arc<dyn Subscription>) + Send + Sync + 'static,
    {
        self.subscribe = Some(Box::new(f));
        self
    }

    /// Sets the next-value callback.
    pub fn on_next_fn<F>(mut self, f: F) -> Self
    where
        F: Fn(T) + Send + Sync + 'static,
    {
        self.next = Some(Box::new(f));
        self
    }

    /// Sets the error callback.
    pub fn on_error_fn<F>(mut self, f: F) -> Self
    where
        F: Fn(E) + Send + Sync + 'static,
    {
        self.error = Some(Box::new(f));
        self
    }

    /// Sets the completion callback.
    pub fn on_complete_fn<F>(mut self, f: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.complete = Some(Box::new(f));
        self
    }
}

impl<T, E> Default for CallbackConsumer<T, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, E> SignalConsumer<T, E> for CallbackConsumer<T, E>
where
    T: Send,
    E: Send,
{
    fn on_subscribe(&self, subscription: Arc<dyn Subscription>) {
        if let Some(f) = &self.subscribe {
            f(subscription);
        }
    }

    fn on_next(&self, value: T) {
        if let Some(f) = &self.next {
            f(value);
        }
    }

    fn on_error(&self, error: E) {
        if let Some(f) = &self.error {
            f(error);
        }
    }

    fn on_complete(&self) {
        if let Some(f) = &self.complete {
            f();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicBool, Ordering};

    #[test]
    fn supplied_callbacks_fire() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let done = Arc::new(AtomicBool::new(false));

        let consumer = {
            let seen = seen.clone();
            let done = done.clone();
            CallbackConsumer::<u32, &'static str>::new()
                .on_next_fn(move |value| seen.lock().unwrap().push(value))
                .on_complete_fn(move || done.store(true, Ordering::SeqCst))
        };

        consumer.on_next(1);
        consumer.on_next(2);
        consumer.on_complete();
        // No error callback was supplied; this is a silent no-op.
        consumer.on_error("ignored");

        assert_eq!(*seen.lock().unwrap(), vec![1, 2]);
        assert!(done.load(Ordering::SeqCst));
    }
}
