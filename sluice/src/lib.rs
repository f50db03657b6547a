//! # sluice - Serializing Signal Gateway
//!
//! `sluice` funnels signals from any number of concurrent producer threads
//! into a single downstream consumer, which observes them strictly one at a
//! time: zero or more next-values followed by at most one terminal signal,
//! with re-entrant calls queued instead of recursed into.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use sluice::{Serialized, SignalConsumer};
//!
//! let gateway = std::sync::Arc::new(Serialized::new(my_consumer));
//!
//! // Any thread, any time, no external synchronization:
//! gateway.on_next(value);
//! gateway.on_complete();          // first terminal wins
//! gateway.on_next(late_value);    // dropped, the stream is over
//! ```
//!
//! The gateway is fire-and-forget for producers: it never raises errors back
//! at them, it only forwards or drops. Flow control, schedulers, and
//! cancellation all live in layers above it.

#![deny(clippy::pub_use, clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use sluice_core::{
    // Error types
    BoxError,
    ProtocolViolation,
    // Signal protocol
    Signal,
    SignalConsumer,
    Subscription,
};

pub use sluice_std::{
    consumers::{CallbackConsumer, InspectConsumer},
    gate::{Admission, EmissionGate},
    mailbox::Mailbox,
    serialized::Serialized,
};

/// Testing utilities (recording/counting consumers, inert subscriptions).
pub mod testing {
    #![allow(clippy::wildcard_imports)]
    pub use sluice_std::testing::*;
}
