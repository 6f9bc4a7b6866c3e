//! Error types for lookups
//!
//! A missing entry is not an error: it surfaces as
//! [`LookupOutcome::NotFound`](crate::lexicon::LookupOutcome). The variants
//! here cover transport, decoding and persistence failures.

use thiserror::Error;

/// Result type alias for lexicon operations
pub type LexiconResult<T> = Result<T, LexiconError>;

/// Error types for lexicon operations
#[derive(Debug, Error)]
pub enum LexiconError {
    /// The API answered with a non-success status; the body is kept verbatim
    #[error("Request failed with status {status}")]
    Transport { status: u16, body: String },

    /// The request never produced a response
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The response body was not valid JSON
    #[error("Failed to decode API response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The response was JSON but carried neither an error nor page text
    #[error("Malformed API response: {0}")]
    MalformedResponse(String),

    /// Persisted user state could not be read or written
    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<anyhow::Error> for LexiconError {
    fn from(err: anyhow::Error) -> Self {
        // {:#} keeps the context chain
        Self::Config(format!("{err:#}"))
    }
}

impl LexiconError {
    /// Check if this is an HTTP status or network failure
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. } | Self::Network(_))
    }

    /// Raw body to surface to the user for transport failures
    #[must_use]
    pub fn response_body(&self) -> Option<&str> {
        match self {
            Self::Transport { body, .. } => Some(body),
            _ => None,
        }
    }
}
