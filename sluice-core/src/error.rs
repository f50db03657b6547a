//! Error types for Sluice.
//!
//! The gateway itself never raises errors toward producers: late or duplicate
//! signals are dropped, not rejected (see [`crate::SignalConsumer`]). The
//! types here cover the two error surfaces the crate does have:
//!
//! - [`BoxError`] - the conventional failure payload for `Signal::Error` when
//!   callers have no richer type of their own
//! - [`ProtocolViolation`] - the ways a *recorded* signal sequence can break
//!   the serialized protocol, produced by verification helpers, never by the
//!   gateway

use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A violation of the serialized signal protocol found in a recorded
/// sequence.
///
/// A consumer behind a healthy gateway observes zero or more next-values
/// followed by at most one terminal signal. Verification helpers (such as
/// the recording consumer in `sluice-std`) walk a recorded sequence and
/// report the first deviation as one of these.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProtocolViolation {
    /// A next-value was observed after a terminal signal.
    #[error("next-value observed after a terminal signal")]
    NextAfterTerminal,

    /// More than one terminal signal was observed.
    #[error("second terminal signal observed")]
    SecondTerminal,
}
