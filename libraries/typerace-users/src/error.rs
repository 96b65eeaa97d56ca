//! Error types for user records

use thiserror::Error;

use crate::types::UserId;

/// Result type alias using `UserRecordError`
pub type Result<T> = std::result::Result<T, UserRecordError>;

/// Error type for decoding, encoding and checking user records
#[derive(Error, Debug)]
pub enum UserRecordError {
    /// Wire input could not be decoded into the named record
    #[error("Malformed {record}: {message}")]
    Decode {
        /// Record name (e.g. `User`)
        record: &'static str,
        /// Underlying decoder message, including line and column
        message: String,
    },

    /// A record could not be serialized
    #[error("Encode error: {0}")]
    Encode(#[source] serde_json::Error),

    /// A request header was evaluated at or after its expiry instant
    #[error("Request header for user {id} expired at {expires_at} (now {now})")]
    Expired {
        /// User the header was issued for
        id: UserId,
        /// Expiry instant carried by the header
        expires_at: i64,
        /// Instant the header was evaluated at
        now: i64,
    },

    /// Unknown record kind name
    #[error("Unknown record kind: {0}")]
    UnknownKind(String),

    /// Settings could not be loaded or are invalid
    #[error("Configuration error: {0}")]
    Config(String),
}

impl UserRecordError {
    /// Create a decode error for the given record
    pub fn decode(record: &'static str, err: &serde_json::Error) -> Self {
        Self::Decode {
            record,
            message: err.to_string(),
        }
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Whether this error rejects an expired header
    pub fn is_expired(&self) -> bool {
        matches!(self, Self::Expired { .. })
    }
}

impl From<config::ConfigError> for UserRecordError {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}
