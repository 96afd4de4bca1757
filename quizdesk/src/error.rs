//! Failure taxonomy for one request.

use thiserror::Error;

/// Why a trigger's request failed.
///
/// All variants are caught in the handler and end up in the diagnostic
/// channel; none is shown in the UI.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Connection-level failure: DNS, refused connection, reset, timeout
    #[error("transport error: {0}")]
    Transport(String),

    /// The server answered outside the 2xx range
    #[error("server responded with status {status}")]
    ResponseStatus { status: u16 },

    /// The body was expected to be JSON (or to carry a field) and was not
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

impl FetchError {
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::ResponseStatus { status } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            FetchError::ResponseStatus {
                status: status.as_u16(),
            }
        } else if err.is_decode() {
            FetchError::MalformedResponse(err.to_string())
        } else {
            FetchError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::MalformedResponse(err.to_string())
    }
}
