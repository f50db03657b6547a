//! Standard consumer implementations.

mod callback;
mod logging;

pub use callback::CallbackConsumer;
pub use logging::InspectConsumer;
