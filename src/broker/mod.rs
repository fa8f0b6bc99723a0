pub mod dispatcher;
pub mod engine;
pub mod message;
pub mod topic;
pub mod user;

use std::sync::{Arc, Mutex};

pub use engine::{PublishReceipt, Registry};

/// A registry shared between callers. Every operation, including the whole
/// of a publish, runs inside one lock acquisition.
pub type SharedRegistry = Arc<Mutex<Registry>>;
