//! # sluice-core
//!
//! Core types and traits for the Sluice serializing signal gateway.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! consumers and integrations that don't need the full `sluice-std`
//! implementation.
//!
//! # The Signal Protocol
//!
//! A stream is a sequence of [`Signal`]s: zero or more next-values followed
//! by at most one terminal signal (an error or a completion). Producers push
//! signals; a [`SignalConsumer`] receives them. The gateway in `sluice-std`
//! sits between the two and guarantees that the consumer observes a
//! well-formed, serialized sequence no matter how many threads produce
//! concurrently:
//!
//! - never more than one thread inside a consumer callback at a time
//! - no signal lost or duplicated before termination
//! - exactly one terminal signal, after which the stream is inert
//! - re-entrant calls from inside a callback are queued, not recursed into
//!
//! # Error Types
//!
//! - [`BoxError`] - conventional failure payload for dynamic error handling
//! - [`ProtocolViolation`] - deviations a verification helper can find in a
//!   recorded signal sequence

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod consumer;
mod error;
mod signal;
mod subscription;

// Re-exports
pub use consumer::SignalConsumer;
pub use error::{BoxError, ProtocolViolation};
pub use signal::Signal;
pub use subscription::Subscription;
