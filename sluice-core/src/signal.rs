//! Signal data model.

/// One unit of stream data passed through the gateway.
///
/// A signal is either a next-value carrying a payload, a failure, or a
/// completion marker. Signals are immutable once constructed; the gateway
/// moves them between threads but never rewrites them.
///
/// `Error` and `Complete` are *terminal*: at most one terminal signal is ever
/// delivered to a given consumer, and nothing is delivered after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Signal<T, E> {
    /// A next-value.
    ///
    /// The payload is opaque to the gateway. Absent values are expressed at
    /// the payload type level (`T = Option<V>`), so `Next(None)` is an
    /// ordinary next-value, never conflated with "no signal pending".
    Next(T),
    /// A failure produced upstream. Terminal.
    Error(E),
    /// Successful end of the stream. Terminal.
    Complete,
}

impl<T, E> Signal<T, E> {
    /// Returns `true` for a next-value.
    pub fn is_next(&self) -> bool {
        matches!(self, Signal::Next(_))
    }

    /// Returns `true` for an error or completion signal.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Signal::Error(_) | Signal::Complete)
    }

    /// Transforms the payload of a next-value; terminal signals pass through.
    pub fn map<U, F>(self, f: F) -> Signal<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Signal::Next(value) => Signal::Next(f(value)),
            Signal::Error(error) => Signal::Error(error),
            Signal::Complete => Signal::Complete,
        }
    }

    /// Transforms the failure payload; other signals pass through.
    pub fn map_err<F, G>(self, f: G) -> Signal<T, F>
    where
        G: FnOnce(E) -> F,
    {
        match self {
            Signal::Next(value) => Signal::Next(value),
            Signal::Error(error) => Signal::Error(f(error)),
            Signal::Complete => Signal::Complete,
        }
    }
}
