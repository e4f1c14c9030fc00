use std::fmt;

/// Result type for rollcall-providers operations
pub type Result<T> = std::result::Result<T, FetchError>;

/// Failure to obtain a page from the remote source.
///
/// Carries no retry hint; the caller decides whether to ask again.
#[derive(Debug)]
pub enum FetchError {
    /// Request could not be sent or the body could not be read
    Transport(reqwest::Error),

    /// Source answered with a non-success status
    Status { status: u16, url: String },

    /// Body was not a valid page envelope
    Decode(serde_json::Error),

    /// Endpoint URL could not be built
    InvalidEndpoint(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Transport(err) => write!(f, "Transport error: {}", err),
            FetchError::Status { status, url } => {
                write!(f, "Request to '{}' returned status {}", url, status)
            }
            FetchError::Decode(err) => write!(f, "Decode error: {}", err),
            FetchError::InvalidEndpoint(msg) => write!(f, "Invalid endpoint: {}", msg),
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FetchError::Transport(err) => Some(err),
            FetchError::Decode(err) => Some(err),
            FetchError::Status { .. } | FetchError::InvalidEndpoint(_) => None,
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Transport(err)
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Decode(err)
    }
}
