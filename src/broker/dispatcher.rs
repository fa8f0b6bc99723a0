//! Fan-out delivery
//!
//! The dispatcher takes the messages drained from one topic and notifies
//! every subscriber of each of them. Messages go out in enqueue order and,
//! for each message, subscribers are visited in subscription order.
//!
//! A subscriber with an attached inbox `Client` receives a `Delivery` on its
//! channel; everyone else goes through the fallback `Notify` handler.

use std::collections::HashMap;
use std::fmt;

use crate::broker::message::{Delivery, Message};
use crate::broker::topic::SubscriberId;
use crate::broker::user::User;
use crate::client::{Client, ConsoleNotifier, Notify};

pub struct Dispatcher {
    clients: HashMap<SubscriberId, Client>,
    fallback: Box<dyn Notify>,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new(Box::new(ConsoleNotifier))
    }
}

impl Dispatcher {
    pub fn new(fallback: Box<dyn Notify>) -> Self {
        Self {
            clients: HashMap::new(),
            fallback,
        }
    }

    /// Route deliveries for `client.id` to its channel. Replaces any inbox
    /// previously attached for the same user.
    pub fn register_client(&mut self, client: Client) {
        self.clients.insert(client.id.clone(), client);
    }

    pub fn remove_client(&mut self, client_id: &str) -> Option<Client> {
        self.clients.remove(client_id)
    }

    /// Notify every subscriber of every message. Subscriber names are
    /// resolved through `users`; returns the number of notifications made.
    pub fn deliver(
        &self,
        messages: &[Message],
        subscribers: &[SubscriberId],
        users: &HashMap<String, User>,
    ) -> usize {
        let mut delivered = 0;

        for msg in messages {
            for sub_id in subscribers {
                let Some(user) = users.get(sub_id) else {
                    tracing::warn!(subscriber = %sub_id, topic = %msg.topic, "subscriber is not a registered user");
                    continue;
                };

                match self.clients.get(sub_id) {
                    Some(client) => {
                        if let Err(e) = client.deliver(Delivery::from(msg)) {
                            tracing::warn!(subscriber = %sub_id, error = %e, "inbox closed, delivery dropped");
                            continue;
                        }
                    }
                    None => self.fallback.notify(user, &msg.text),
                }

                tracing::trace!(subscriber = %sub_id, topic = %msg.topic, message_id = %msg.id, "delivered");
                delivered += 1;
            }
        }

        delivered
    }
}

impl fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("clients", &self.clients.keys().collect::<Vec<_>>())
            .field("fallback", &"dyn Notify")
            .finish()
    }
}
