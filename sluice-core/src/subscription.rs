//! Upstream subscription handle.

/// An opaque handle to the upstream production, handed to the consumer once
/// during the subscription handshake.
///
/// The gateway forwards this handle but never invokes it: request-based flow
/// control and cancellation wiring belong to the layer above the gateway.
/// Implementations should make `cancel` idempotent, since a consumer may be
/// defensive about calling it more than once.
pub trait Subscription: Send + Sync {
    /// Asks the upstream production to stop. Idempotent.
    fn cancel(&self);
}
