//! The `error` module defines the error types used within `topicreg`.
//!
//! Every registry operation returns one of a closed set of outcomes. The
//! `Display` text of each variant is the line the command shell prints.

use std::fmt;

use thiserror::Error;

/// Which kind of named entity an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    User,
    Topic,
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entity::User => f.write_str("User"),
            Entity::Topic => f.write_str("Topic"),
        }
    }
}

/// Errors returned by [`crate::broker::Registry`] operations.
///
/// A failed operation never leaves a partial mutation behind.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("{0} already exists.")]
    AlreadyExists(Entity, String),

    #[error("Only ADMIN can add topics.")]
    Unauthorized { user: String },

    #[error("User does not exist.")]
    NoSuchUser(String),

    #[error("Topic does not exist.")]
    NoSuchTopic(String),

    #[error("User is already subscribed.")]
    AlreadySubscribed { topic: String, user: String },

    #[error("Invalid message format.")]
    MalformedMessage(#[source] serde_json::Error),
}

impl RegistryError {
    /// Static label for log fields.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::AlreadyExists(..) => "already_exists",
            Self::Unauthorized { .. } => "unauthorized",
            Self::NoSuchUser(_) => "no_such_user",
            Self::NoSuchTopic(_) => "no_such_topic",
            Self::AlreadySubscribed { .. } => "already_subscribed",
            Self::MalformedMessage(_) => "malformed_message",
        }
    }
}

/// Errors produced while turning a shell line into a command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// Right command, wrong number of arguments.
    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error("Unknown command.")]
    Unknown(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_console_lines() {
        assert_eq!(
            RegistryError::AlreadyExists(Entity::User, "bob".into()).to_string(),
            "User already exists."
        );
        assert_eq!(
            RegistryError::AlreadyExists(Entity::Topic, "news".into()).to_string(),
            "Topic already exists."
        );
        assert_eq!(
            RegistryError::NoSuchTopic("news".into()).to_string(),
            "Topic does not exist."
        );
        assert_eq!(
            CommandError::Usage("addUser userName role").to_string(),
            "Usage: addUser userName role"
        );
        assert_eq!(
            CommandError::Unknown("frobnicate".into()).to_string(),
            "Unknown command."
        );
    }

    #[test]
    fn malformed_message_keeps_decode_error_as_source() {
        let decode_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = RegistryError::MalformedMessage(decode_err);
        assert!(std::error::Error::source(&err).is_some());
        assert_eq!(err.error_code(), "malformed_message");
    }
}
