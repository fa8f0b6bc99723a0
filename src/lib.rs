//! # topicreg
//!
//! `topicreg` is a minimalist, in-memory publish/subscribe registry.
//! Users register with a role, administrators create named topics, users
//! subscribe to topics and every published message is fanned out
//! synchronously to the topic's current subscribers.
//!
//! ## Core Modules
//!
//! - `broker`: the registry, topics, messages and the dispatcher that delivers them.
//! - `client`: how a subscriber is notified (console handler or a per-user inbox channel).
//! - `config`: loading and merging settings.
//! - `shell`: the line-based command interpreter driving the registry.
//! - `utils`: shared error types and logging setup.

pub mod broker;
pub mod client;
pub mod config;
pub mod shell;
pub mod utils;

#[cfg(test)]
mod tests;
