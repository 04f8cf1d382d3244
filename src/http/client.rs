//! HTTP client used to stream the GraalVM archive.

use anyhow::{Context, Result};
use log::debug;
use reqwest::Client;
use std::io::Write;

use super::status::classify_status;
use crate::error::GraalError;

/// Thin wrapper over a reqwest [`Client`] that streams response bodies.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Creates a new HTTP client wrapping the given reqwest Client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Streams the body of `url` into `writer` and returns the number of bytes written.
    ///
    /// A single attempt is made. Non-success statuses map to [`GraalError::Fetch`]
    /// and connection failures to [`GraalError::Transport`]. A body that ends
    /// before its `Content-Length`, whether hyper reports the early close or the
    /// stream just stops, is a [`GraalError::Truncated`].
    #[tracing::instrument(skip(self, writer))]
    pub async fn download_file<W>(&self, url: &str, writer: &mut W) -> Result<u64>
    where
        W: Write + Send + ?Sized,
    {
        debug!("Downloading file from {}...", url);

        let transport = |e: reqwest::Error| GraalError::Transport {
            url: url.to_string(),
            message: e.to_string(),
        };

        let mut response = self.client.get(url).send().await.map_err(transport)?;

        if let Some(failure) = classify_status(response.status()) {
            return Err(GraalError::Fetch {
                url: url.to_string(),
                failure,
            }
            .into());
        }

        let expected = response.content_length();
        let mut downloaded_bytes: u64 = 0;

        let truncated = |received: u64| GraalError::Truncated {
            url: url.to_string(),
            expected: expected.unwrap_or_default(),
            received,
        };

        loop {
            let chunk = match response.chunk().await {
                Ok(Some(chunk)) => chunk,
                Ok(None) => break,
                // The peer closed before Content-Length; reqwest reports it as a
                // body or decode error depending on where hyper noticed.
                Err(e)
                    if (e.is_body() || e.is_decode())
                        && expected.is_some_and(|n| n > downloaded_bytes) =>
                {
                    debug!("Body read failed after {} bytes: {}", downloaded_bytes, e);
                    return Err(truncated(downloaded_bytes).into());
                }
                Err(e) => return Err(transport(e).into()),
            };
            writer
                .write_all(&chunk)
                .context("Failed to write chunk to file")?;
            downloaded_bytes += chunk.len() as u64;
        }
        writer.flush().context("Failed to flush downloaded file")?;

        if expected.is_some_and(|n| n != downloaded_bytes) {
            return Err(truncated(downloaded_bytes).into());
        }

        debug!(
            "Downloaded {:.2} MB",
            downloaded_bytes as f64 / (1024.0 * 1024.0)
        );

        Ok(downloaded_bytes)
    }
}
