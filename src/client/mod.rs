//! The `client` module defines how subscribers receive messages.
//!
//! `Notify` is the delivery capability: `ConsoleNotifier` is the in-process
//! handler, and `Client` is a per-user inbox channel that decouples the
//! publisher from whoever drains the inbox.

pub mod notifier;
pub mod pubsub_client;

pub use notifier::{ConsoleNotifier, Notify};
pub use pubsub_client::Client;
