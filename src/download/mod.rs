use anyhow::{Context, Result};
use async_trait::async_trait;
use log::{debug, info, warn};
#[cfg(test)]
use mockall::automock;
use std::io::Write;
use std::sync::Arc;

use crate::cache::CacheEntry;
use crate::cleanup::{CleanupGuard, SharedCleanupContext};
use crate::http::HttpClient;
use crate::runtime::Runtime;

/// Source of archive bytes.
///
/// Split from [`HttpClient`] so the cache logic can be exercised without a
/// server, and so tests can count how often the network is touched.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait Downloader: Send + Sync {
    /// Streams the body of `url` into `writer` and flushes it, returning the
    /// byte count.
    async fn download(&self, url: &str, writer: Box<dyn Write + Send>) -> Result<u64>;
}

/// [`Downloader`] backed by an HTTP GET.
pub struct HttpDownloader {
    client: HttpClient,
}

impl HttpDownloader {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Downloader for HttpDownloader {
    async fn download(&self, url: &str, mut writer: Box<dyn Write + Send>) -> Result<u64> {
        self.client.download_file(url, writer.as_mut()).await
    }
}

/// Downloads `url` into the cache entry's final path.
///
/// The payload goes to the entry's partial path first and is renamed once
/// fully written and flushed. On failure the partial file is removed and the
/// final path is left untouched. The caller must have created the entry's
/// directory.
#[tracing::instrument(skip(runtime, downloader, entry, cleanup_ctx))]
pub async fn download_to_cache<R, D>(
    runtime: &R,
    downloader: &D,
    url: &str,
    entry: &CacheEntry,
    cleanup_ctx: &SharedCleanupContext,
) -> Result<u64>
where
    R: Runtime,
    D: Downloader + ?Sized,
{
    let partial_path = entry.partial_path();
    let final_path = entry.path();
    info!("Downloading {} to {:?}...", url, final_path);

    let _guard = CleanupGuard::new(Arc::clone(cleanup_ctx), partial_path.clone());

    let result = async {
        let writer = runtime
            .create_file(&partial_path)
            .with_context(|| format!("Failed to create partial file at {:?}", partial_path))?;
        let bytes = downloader.download(url, writer).await?;

        runtime
            .rename(&partial_path, &final_path)
            .with_context(|| format!("Failed to move download into place at {:?}", final_path))?;
        Ok::<_, anyhow::Error>(bytes)
    }
    .await;

    match &result {
        Ok(bytes) => info!("Download complete ({} bytes).", bytes),
        Err(e) => {
            debug!("Download failed ({}), removing {:?}", e, partial_path);
            if runtime.exists(&partial_path) {
                if let Err(remove_err) = runtime.remove_file(&partial_path) {
                    warn!(
                        "Failed to remove partial download {:?}: {}",
                        partial_path, remove_err
                    );
                }
            }
        }
    }

    result
}
