//! Typed failures that callers may want to tell apart.
//!
//! Filesystem failures are not listed here; they travel as `anyhow::Error`
//! with the offending path in their context.

use thiserror::Error;

use crate::artifact::TemplateError;
use crate::http::FetchFailure;

#[derive(Debug, Error)]
pub enum GraalError {
    /// The host operating system has no GraalVM vendor token.
    #[error("No GraalVM support for operating system '{0}'")]
    UnsupportedOperatingSystem(String),

    /// The host CPU architecture has no GraalVM vendor token.
    #[error("No GraalVM support for architecture '{0}'")]
    UnsupportedArchitecture(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Template(#[from] TemplateError),

    /// The server answered with a non-success status.
    #[error("Failed to fetch {url}: {failure}")]
    Fetch { url: String, failure: FetchFailure },

    /// Connecting or reading the body failed below the HTTP layer.
    #[error("Failed to fetch {url}: {message}")]
    Transport { url: String, message: String },

    /// The body ended before the announced `Content-Length`.
    #[error("Truncated download from {url}: expected {expected} bytes, received {received}")]
    Truncated {
        url: String,
        expected: u64,
        received: u64,
    },
}
