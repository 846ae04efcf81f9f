//! Cross-cutting error enums.
//!
//! `LlmError` and `SpeechError` live next to their domain types in
//! [`crate::llm`] and [`crate::speech`]; this module holds the rest.

use thiserror::Error;

/// Errors from the persisted memory file.
#[derive(Debug, Error)]
pub enum MemoryError {
    #[error("memory file error: {0}")]
    Io(#[from] std::io::Error),

    /// The file exists but is not the expected JSON object. Unrecoverable
    /// without operator intervention, so it propagates.
    #[error("malformed memory file: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Errors from the chat-platform connector.
///
/// `NotFound` and `Unauthorized` are split out so the router can tell a
/// deleted/forbidden referenced message apart from transport failures.
#[derive(Debug, Error)]
pub enum ConnectorError {
    #[error("message not found")]
    NotFound,

    #[error("not authorized to access the message")]
    Unauthorized,

    #[error("platform returned {status}: {message}")]
    Http { status: u16, message: String },

    #[error("platform request failed: {0}")]
    Request(String),

    #[error("attachment error: {0}")]
    Io(#[from] std::io::Error),
}

/// Startup configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required secret is not present in the environment. The process
    /// cannot start without it.
    #[error("required secret '{0}' is not set in the environment")]
    MissingSecret(String),
}

/// Everything a reply cycle can fail with.
#[derive(Debug, Error)]
pub enum ReplyError {
    #[error(transparent)]
    Memory(#[from] MemoryError),

    #[error(transparent)]
    Llm(#[from] crate::llm::LlmError),

    #[error(transparent)]
    Speech(#[from] crate::speech::SpeechError),

    #[error(transparent)]
    Connector(#[from] ConnectorError),
}
