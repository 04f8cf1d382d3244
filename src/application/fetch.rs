//! Fetch use case: resolve the artifact, consult the cache, download on a miss.

use anyhow::Result;
use log::info;
use std::path::{Path, PathBuf};

use crate::artifact::ArtifactLocator;
use crate::cache::{CacheEntry, CacheState};
use crate::cleanup::SharedCleanupContext;
use crate::config::GraalConfig;
use crate::download::{Downloader, download_to_cache};
use crate::error::GraalError;
use crate::platform::Platform;
use crate::runtime::Runtime;

/// Everything known about one archive before touching the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactLocation {
    platform: Platform,
    url: String,
    entry: CacheEntry,
}

impl ArtifactLocation {
    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn entry(&self) -> &CacheEntry {
        &self.entry
    }

    pub fn path(&self) -> PathBuf {
        self.entry.path()
    }

    pub fn state<R: Runtime>(&self, runtime: &R) -> CacheState {
        self.entry.state(runtime)
    }
}

/// Resolves platform, URL and cache path without filesystem or network access.
#[tracing::instrument(skip(runtime))]
pub fn locate_artifact<R: Runtime>(
    runtime: &R,
    config: &GraalConfig,
) -> Result<ArtifactLocation> {
    let platform = Platform::detect(runtime)?;

    let locator = ArtifactLocator::new(config.version(), config.base_url(), platform);
    let url = locator.url().map_err(GraalError::from)?;
    let file_name = locator.file_name().map_err(GraalError::from)?;

    Ok(ArtifactLocation {
        platform,
        url,
        entry: CacheEntry::new(config.cache_root(), config.version(), file_name),
    })
}

/// What [`FetchGraal::fetch`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The archive was already cached; nothing was done.
    Cached { path: PathBuf },
    /// The archive was downloaded into the cache.
    Downloaded { path: PathBuf, bytes: u64 },
}

impl FetchOutcome {
    pub fn path(&self) -> &Path {
        match self {
            FetchOutcome::Cached { path } | FetchOutcome::Downloaded { path, .. } => path,
        }
    }

    pub fn was_cached(&self) -> bool {
        matches!(self, FetchOutcome::Cached { .. })
    }
}

/// Downloads a GraalVM CE archive into a version-keyed cache unless it is
/// already there.
pub struct FetchGraal<R: Runtime, D: Downloader> {
    runtime: R,
    downloader: D,
    cleanup_ctx: SharedCleanupContext,
}

impl<R: Runtime, D: Downloader> FetchGraal<R, D> {
    pub fn new(runtime: R, downloader: D, cleanup_ctx: SharedCleanupContext) -> Self {
        Self {
            runtime,
            downloader,
            cleanup_ctx,
        }
    }

    /// Ensures the archive for `config` is in the cache.
    ///
    /// Platform errors surface before the cache or the network is touched.
    /// A cache hit returns [`FetchOutcome::Cached`] without downloading.
    #[tracing::instrument(skip(self))]
    pub async fn fetch(&self, config: &GraalConfig) -> Result<FetchOutcome> {
        let location = locate_artifact(&self.runtime, config)?;
        let path = location.path();

        if location.state(&self.runtime) == CacheState::Present {
            info!("{:?} already exists. Skipping download.", path);
            return Ok(FetchOutcome::Cached { path });
        }

        location.entry.prepare(&self.runtime)?;
        let bytes = download_to_cache(
            &self.runtime,
            &self.downloader,
            &location.url,
            &location.entry,
            &self.cleanup_ctx,
        )
        .await?;

        Ok(FetchOutcome::Downloaded { path, bytes })
    }
}
