use serde::{Deserialize, Serialize};

use crate::utils::error::RegistryError;

/// Represents a published message.
///
/// A message consists of a caller-chosen identifier, the name of the topic
/// it targets, and the text delivered to every subscriber. On the wire it is
/// a JSON object with exactly these three string fields; all three are
/// required and extra fields are ignored.
///
/// # Example
///
/// ```rust
/// use topicreg::broker::message::Message;
///
/// let msg = Message::decode(r#"{"id":"1","topic":"news","text":"hello"}"#).unwrap();
/// assert_eq!(msg.topic, "news");
/// assert_eq!(msg.text, "hello");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub topic: String,
    pub text: String,
}

impl Message {
    pub fn new(id: impl Into<String>, topic: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            topic: topic.into(),
            text: text.into(),
        }
    }

    /// Decodes a raw JSON payload, failing with `MalformedMessage` when it
    /// does not carry `id`, `topic` and `text` as strings.
    pub fn decode(raw: &str) -> Result<Self, RegistryError> {
        serde_json::from_str(raw).map_err(RegistryError::MalformedMessage)
    }

    pub fn encode(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// What a subscriber's inbox receives for each delivered message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivery {
    pub topic: String,
    pub message_id: String,
    pub text: String,
}

impl From<&Message> for Delivery {
    fn from(msg: &Message) -> Self {
        Self {
            topic: msg.topic.clone(),
            message_id: msg.id.clone(),
            text: msg.text.clone(),
        }
    }
}
