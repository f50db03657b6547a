use sluice::testing::{RecordingConsumer, TestFailure};
use sluice::{Serialized, Signal, SignalConsumer, Subscription};
use std::sync::{Arc, OnceLock};

/// What the consumer does, re-entrantly, while processing the value `1`.
#[derive(Clone, Copy)]
enum Reentry {
    ErrorTwice,
    CompleteTwice,
    EmitMore,
}

/// A consumer that calls back into its own gateway from inside `on_next`,
/// before the callback returns.
struct Reentering {
    inner: RecordingConsumer<i32, TestFailure>,
    gateway: OnceLock<Arc<dyn SignalConsumer<i32, TestFailure>>>,
    reentry: Reentry,
}

impl SignalConsumer<i32, TestFailure> for Reentering {
    fn on_subscribe(&self, subscription: Arc<dyn Subscription>) {
        self.inner.on_subscribe(subscription);
    }

    fn on_next(&self, value: i32) {
        self.inner.on_next(value);
        if value == 1 {
            let gateway = self.gateway.get().expect("gateway not attached");
            match self.reentry {
                Reentry::ErrorTwice => {
                    gateway.on_error(TestFailure("reentrant"));
                    gateway.on_error(TestFailure("reentrant"));
                }
                Reentry::CompleteTwice => {
                    gateway.on_complete();
                    gateway.on_complete();
                }
                Reentry::EmitMore => {
                    gateway.on_next(2);
                    gateway.on_next(3);
                }
            }
        }
    }

    fn on_error(&self, error: TestFailure) {
        self.inner.on_error(error);
    }

    fn on_complete(&self) {
        self.inner.on_complete();
    }
}

fn reentering_gateway(reentry: Reentry) -> Arc<Serialized<i32, TestFailure, Reentering>> {
    let gateway = Arc::new(Serialized::new(Reentering {
        inner: RecordingConsumer::new(),
        gateway: OnceLock::new(),
        reentry,
    }));
    let handle: Arc<dyn SignalConsumer<i32, TestFailure>> = gateway.clone();
    assert!(gateway.downstream().gateway.set(handle).is_ok());
    gateway
}

#[test]
fn reentrant_errors_arrive_after_the_value_and_only_once() {
    let gateway = reentering_gateway(Reentry::ErrorTwice);

    gateway.on_next(1);

    let recorder = &gateway.downstream().inner;
    assert_eq!(
        recorder.events(),
        vec![Signal::Next(1), Signal::Error(TestFailure("reentrant"))]
    );
    assert_eq!(recorder.max_in_flight(), 1);
    assert!(gateway.is_terminated());
}

#[test]
fn reentrant_completions_arrive_after_the_value_and_only_once() {
    let gateway = reentering_gateway(Reentry::CompleteTwice);

    gateway.on_next(1);

    let recorder = &gateway.downstream().inner;
    assert_eq!(recorder.events(), vec![Signal::Next(1), Signal::Complete]);
    assert_eq!(recorder.verify(), Ok(1));
}

#[test]
fn reentrant_next_values_flush_in_submission_order() {
    let gateway = reentering_gateway(Reentry::EmitMore);

    gateway.on_next(1);
    gateway.on_complete();

    let recorder = &gateway.downstream().inner;
    assert_eq!(recorder.values(), vec![1, 2, 3]);
    assert_eq!(recorder.verify(), Ok(3));
}
