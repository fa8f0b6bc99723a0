//! Registry engine
//!
//! This module contains the in-memory registry responsible for:
//! - registering users and their roles
//! - creating topics on behalf of `ADMIN` users
//! - managing topic subscriptions
//! - publishing messages and fanning them out through the `Dispatcher`
//!
//! Concurrency and usage notes:
//! - The public API is synchronous. For multiple callers hold the registry
//!   behind a single lock (`SharedRegistry`); a publish then snapshots the
//!   subscriber list inside the same critical section as the mutation.
//! - Every operation validates before it mutates, so a rejected call leaves
//!   the registry exactly as it was.

use std::collections::HashMap;

use tokio::sync::mpsc::{self, UnboundedReceiver};

use crate::broker::dispatcher::Dispatcher;
use crate::broker::message::{Delivery, Message};
use crate::broker::topic::Topic;
use crate::broker::user::User;
use crate::client::{Client, Notify};
use crate::utils::error::{Entity, RegistryError};

/// Outcome of a successful publish.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishReceipt {
    pub topic: String,
    pub delivered: usize,
}

#[derive(Debug, Default)]
pub struct Registry {
    users: HashMap<String, User>,
    topics: HashMap<String, Topic>,
    dispatcher: Dispatcher,
}

impl Registry {
    /// Registry whose subscribers are notified on the console.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_notifier(notifier: Box<dyn Notify>) -> Self {
        Self {
            users: HashMap::new(),
            topics: HashMap::new(),
            dispatcher: Dispatcher::new(notifier),
        }
    }

    pub fn add_user(&mut self, name: &str, role: &str) -> Result<(), RegistryError> {
        if self.users.contains_key(name) {
            return Err(reject(RegistryError::AlreadyExists(Entity::User, name.to_string())));
        }

        self.users.insert(name.to_string(), User::new(name, role));
        tracing::info!(user = %name, role = %role, "user added");
        Ok(())
    }

    /// Create a topic. Only an existing user whose role is exactly `ADMIN`
    /// may do so; authorization is checked before the name.
    pub fn add_topic(&mut self, name: &str, requesting_user: &str) -> Result<(), RegistryError> {
        let authorized = self
            .users
            .get(requesting_user)
            .is_some_and(User::is_admin);
        if !authorized {
            return Err(reject(RegistryError::Unauthorized {
                user: requesting_user.to_string(),
            }));
        }

        if self.topics.contains_key(name) {
            return Err(reject(RegistryError::AlreadyExists(Entity::Topic, name.to_string())));
        }

        self.topics.insert(name.to_string(), Topic::new(name));
        tracing::info!(topic = %name, admin = %requesting_user, "topic added");
        Ok(())
    }

    /// Subscribe `user` to `topic`. A missing topic is reported before a
    /// missing user.
    pub fn subscribe(&mut self, topic: &str, user: &str) -> Result<(), RegistryError> {
        let Some(t) = self.topics.get_mut(topic) else {
            return Err(reject(RegistryError::NoSuchTopic(topic.to_string())));
        };
        if !self.users.contains_key(user) {
            return Err(reject(RegistryError::NoSuchUser(user.to_string())));
        }
        if !t.subscribe(user.to_string()) {
            return Err(reject(RegistryError::AlreadySubscribed {
                topic: topic.to_string(),
                user: user.to_string(),
            }));
        }

        tracing::info!(topic = %topic, user = %user, subscribers = t.subscriber_count(), "subscribed");
        Ok(())
    }

    /// Decode `raw` as a JSON `{id, topic, text}` message and publish it.
    pub fn publish(&mut self, raw: &str) -> Result<PublishReceipt, RegistryError> {
        let message = Message::decode(raw).map_err(reject)?;
        self.publish_message(message)
    }

    /// Enqueue `message` on its topic, deliver it to every current
    /// subscriber and leave the queue empty.
    pub fn publish_message(&mut self, message: Message) -> Result<PublishReceipt, RegistryError> {
        let Some(topic) = self.topics.get_mut(&message.topic) else {
            return Err(reject(RegistryError::NoSuchTopic(message.topic)));
        };

        let message_id = message.id.clone();
        topic.enqueue(message);
        let delivered = topic.drain_and_dispatch(&self.dispatcher, &self.users);

        tracing::info!(topic = %topic.name, message_id = %message_id, delivered, "message published");
        Ok(PublishReceipt {
            topic: topic.name.clone(),
            delivered,
        })
    }

    /// Dispatch whatever is queued on `topic` without enqueuing anything.
    /// Publish already drains, so this delivers nothing unless messages were
    /// queued some other way.
    pub fn drain_topic(&mut self, topic: &str) -> Result<usize, RegistryError> {
        let t = self
            .topics
            .get_mut(topic)
            .ok_or_else(|| reject(RegistryError::NoSuchTopic(topic.to_string())))?;
        Ok(t.drain_and_dispatch(&self.dispatcher, &self.users))
    }

    /// Attach an inbox to `user`; its deliveries go to the returned receiver
    /// from now on. Re-attaching replaces the previous inbox.
    pub fn attach_client(&mut self, user: &str) -> Result<UnboundedReceiver<Delivery>, RegistryError> {
        if !self.users.contains_key(user) {
            return Err(reject(RegistryError::NoSuchUser(user.to_string())));
        }

        let (tx, rx) = mpsc::unbounded_channel();
        self.dispatcher.register_client(Client::new(user, tx));
        tracing::debug!(user = %user, "inbox attached");
        Ok(rx)
    }

    /// Detach the user's inbox; later deliveries fall back to the notifier.
    pub fn detach_client(&mut self, user: &str) -> bool {
        let removed = self.dispatcher.remove_client(user).is_some();
        if removed {
            tracing::debug!(user = %user, "inbox detached");
        }
        removed
    }

    pub fn user(&self, name: &str) -> Option<&User> {
        self.users.get(name)
    }

    pub fn topic(&self, name: &str) -> Option<&Topic> {
        self.topics.get(name)
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    pub fn topic_count(&self) -> usize {
        self.topics.len()
    }

    #[cfg(test)]
    pub(crate) fn topic_mut(&mut self, name: &str) -> Option<&mut Topic> {
        self.topics.get_mut(name)
    }
}

fn reject(err: RegistryError) -> RegistryError {
    tracing::debug!(code = err.error_code(), "{err}");
    err
}
