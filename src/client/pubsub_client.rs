use tokio::sync::mpsc::UnboundedSender;
use tokio::sync::mpsc::error::SendError;

use crate::broker::message::Delivery;
use crate::broker::topic::SubscriberId;

/// A subscriber's inbox attached to the registry.
///
/// While attached, every message delivered to the user named by `id` is sent
/// on `sender` instead of going to the registry's fallback notifier.
#[derive(Debug)]
pub struct Client {
    /// Name of the user this inbox belongs to.
    pub id: SubscriberId,

    /// Channel carrying deliveries to the subscriber.
    pub sender: UnboundedSender<Delivery>,
}

impl Client {
    pub fn new(id: &str, sender: UnboundedSender<Delivery>) -> Self {
        Self {
            id: id.to_string(),
            sender,
        }
    }

    pub fn deliver(&self, delivery: Delivery) -> Result<(), SendError<Delivery>> {
        self.sender.send(delivery)
    }

    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }
}
