//! The `shell` module is the line-based front end of the registry.
//!
//! It turns free text into one of five commands (`addUser`, `addTopic`,
//! `subscribeTopic`, `publishMessage`, `exit`), applies them to a
//! `Registry` and reports each outcome as one console line.

pub mod command;
pub mod repl;

pub use command::Command;
pub use repl::{execute, run};
