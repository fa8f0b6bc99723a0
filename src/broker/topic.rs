//! Topic management
//!
//! A `Topic` holds the subscribers of one named channel and the messages
//! waiting to be dispatched to them. Subscribers are stored by user name and
//! kept in subscription order; the queue is only non-empty while a publish
//! is in progress.
//!
//! Concurrency note: callers must synchronize access to `Topic` (for example
//! via the registry lock) when modifying subscriptions.

use std::collections::HashMap;

use crate::broker::dispatcher::Dispatcher;
use crate::broker::message::Message;
use crate::broker::user::User;

pub type SubscriberId = String;

#[derive(Debug, Default)]
pub struct Topic {
    pub name: String,
    pub subscribers: Vec<SubscriberId>,
    pending: Vec<Message>,
}

impl Topic {
    /// Create a new topic with no subscribers and an empty queue.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            subscribers: Vec::new(),
            pending: Vec::new(),
        }
    }

    /// Add a subscriber. Returns `false` if it was already present.
    pub fn subscribe(&mut self, id: SubscriberId) -> bool {
        if self.is_subscribed(&id) {
            return false;
        }
        self.subscribers.push(id);
        true
    }

    pub fn is_subscribed(&self, id: &str) -> bool {
        self.subscribers.iter().any(|s| s == id)
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Append a message to the pending queue.
    pub fn enqueue(&mut self, message: Message) {
        self.pending.push(message);
    }

    pub fn pending(&self) -> &[Message] {
        &self.pending
    }

    /// Hand every queued message to the dispatcher, in enqueue order, then
    /// leave the queue empty. Returns the number of notifications made.
    pub fn drain_and_dispatch(
        &mut self,
        dispatcher: &Dispatcher,
        users: &HashMap<String, User>,
    ) -> usize {
        let drained = std::mem::take(&mut self.pending);
        dispatcher.deliver(&drained, &self.subscribers, users)
    }
}
