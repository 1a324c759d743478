use std::fmt;

use crate::client::ClientError;

/// The message shown when submission is attempted with no input.
pub const VALIDATION_MESSAGE: &str = "Please provide text or upload a file";

/// The fallback shown when a failure carries no usable message.
pub const FALLBACK_MESSAGE: &str = "An unexpected error occurred";

/// Represents the different ways a submission attempt can fail.
///
/// `Display` is the exact text shown in the error panel, so a
/// service-supplied detail message surfaces verbatim.
#[derive(Debug, Clone, PartialEq)]
pub enum FormError {
    /// Neither text nor a file was supplied; never reaches the network
    Validation,
    /// The HTTP call itself failed
    Transport(String),
    /// The service reported a structured error with a detail message
    Service(String),
    /// Any other failure
    Unknown(String),
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation => write!(f, "{}", VALIDATION_MESSAGE),
            Self::Transport(msg) => write!(f, "{}", msg),
            Self::Service(msg) => write!(f, "{}", msg),
            Self::Unknown(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for FormError {}

impl From<ClientError> for FormError {
    /// Picks the user-facing message by priority: the service's detail
    /// message when one was carried, then the transport's own message,
    /// then the generic fallback.
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Service {
                detail: Some(detail),
                ..
            } => FormError::Service(detail),
            ClientError::Service { status, .. } => {
                FormError::Transport(format!("request failed with status {}", status))
            }
            ClientError::Request(e) => FormError::Transport(e.to_string()),
            ClientError::Decode(_) => FormError::Unknown(FALLBACK_MESSAGE.to_string()),
        }
    }
}
