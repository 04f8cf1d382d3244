//! Classification of failed HTTP responses.
//!
//! Nothing here is retried; the classification only shapes the error message.

use reqwest::StatusCode;
use std::fmt;

/// Why the server refused to hand over the artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchFailure {
    /// HTTP 404: usually a version that was never published for this platform.
    NotFound,
    /// HTTP 401
    Unauthorized,
    /// HTTP 403
    Forbidden,
    /// HTTP 429
    TooManyRequests,
    /// Any other 4xx.
    ClientError(u16),
    /// Any 5xx.
    ServerError(u16),
    /// A status outside the error ranges that is still not a success.
    Unexpected(u16),
}

impl fmt::Display for FetchFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchFailure::NotFound => write!(
                f,
                "not found (HTTP 404). Check the GraalVM version and base URL"
            ),
            FetchFailure::Unauthorized => write!(f, "authentication required (HTTP 401)"),
            FetchFailure::Forbidden => write!(f, "access forbidden (HTTP 403)"),
            FetchFailure::TooManyRequests => {
                write!(f, "too many requests (HTTP 429). Try again later")
            }
            FetchFailure::ClientError(code) => write!(f, "request rejected (HTTP {})", code),
            FetchFailure::ServerError(code) => write!(f, "server error (HTTP {})", code),
            FetchFailure::Unexpected(code) => write!(f, "unexpected response (HTTP {})", code),
        }
    }
}

/// Maps a non-success status to a [`FetchFailure`]. Returns `None` for 2xx.
pub fn classify_status(status: StatusCode) -> Option<FetchFailure> {
    if status.is_success() {
        return None;
    }
    let failure = match status {
        StatusCode::NOT_FOUND => FetchFailure::NotFound,
        StatusCode::UNAUTHORIZED => FetchFailure::Unauthorized,
        StatusCode::FORBIDDEN => FetchFailure::Forbidden,
        StatusCode::TOO_MANY_REQUESTS => FetchFailure::TooManyRequests,
        s if s.is_client_error() => FetchFailure::ClientError(s.as_u16()),
        s if s.is_server_error() => FetchFailure::ServerError(s.as_u16()),
        s => FetchFailure::Unexpected(s.as_u16()),
    };
    Some(failure)
}
