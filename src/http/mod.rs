//! HTTP client module: streaming downloads and status classification.

mod client;
mod status;

pub use client::HttpClient;
pub use status::{FetchFailure, classify_status};
