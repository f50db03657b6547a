//! # sluice-std
//!
//! Standard implementations for the Sluice serializing gateway.
//!
//! This crate provides:
//! - **The gateway**: [`Serialized`], the facade producers call
//! - **The engine**: [`EmissionGate`] and [`Mailbox`], the admit/drain
//!   machinery behind the facade
//! - **Standard consumers**: closure-backed and log-and-forward adapters
//! - **Testing utilities**: recording/counting consumers and an inert
//!   subscription handle
//!
//! [`Serialized`]: serialized::Serialized
//! [`EmissionGate`]: gate::EmissionGate
//! [`Mailbox`]: mailbox::Mailbox

#![deny(clippy::pub_use, clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use sluice_core;

// Modules
pub mod consumers;
pub mod gate;
pub mod mailbox;
pub mod serialized;
pub mod testing;
