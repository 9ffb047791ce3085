use thiserror::Error;

use super::transport::TransportError;

/// Failures surfaced by the engagement data-access layer.
///
/// Nothing below this boundary is re-thrown to callers; every failure is
/// normalized into a single message via [`ApiError::message`].
#[derive(Debug, Error)]
pub enum ApiError {
    /// The identifier was rejected locally, before any request was issued.
    #[error("Invalid Engagement Id {0}")]
    InvalidId(String),

    /// The transport resolved but the envelope carried no record.
    #[error("Missing engagement object")]
    MissingEngagement,

    /// Any failure raised during the network call.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl ApiError {
    /// Normalize the failure into the message handed to callers.
    ///
    /// A bare message string is upper-cased; every structured error keeps
    /// its display text verbatim. The asymmetry is longstanding observed
    /// behavior and is kept as-is.
    pub fn message(&self) -> String {
        match self {
            ApiError::Transport(TransportError::Message(text)) => text.to_uppercase(),
            other => other.to_string(),
        }
    }
}
