//! Version-keyed cache of downloaded archives.
//!
//! Layout: `<cache-root>/<version>/<file-name>`. An archive is considered
//! cached as soon as a file exists under its final name; downloads are
//! streamed into `<file-name>.<pid>.part` and renamed, so the final name is
//! only ever taken by a complete payload, even with concurrent runs.

use anyhow::{Context, Result};
use log::debug;
use std::path::{Path, PathBuf};

use crate::runtime::Runtime;

const PARTIAL_SUFFIX: &str = ".part";

/// Whether the archive is already on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheState {
    /// Nothing under the final name; a fetch is needed.
    Absent,
    /// The archive exists; fetching is a no-op.
    Present,
}

/// Location of one archive inside the cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry {
    dir: PathBuf,
    file_name: String,
}

impl CacheEntry {
    pub fn new(cache_root: &Path, version: &str, file_name: impl Into<String>) -> Self {
        Self {
            dir: cache_root.join(version),
            file_name: file_name.into(),
        }
    }

    /// The version's subdirectory, `<cache-root>/<version>`.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Final path of the archive.
    pub fn path(&self) -> PathBuf {
        self.dir.join(&self.file_name)
    }

    /// Sibling path this process streams the payload into before the rename.
    pub fn partial_path(&self) -> PathBuf {
        self.partial_path_for(std::process::id())
    }

    fn partial_path_for(&self, pid: u32) -> PathBuf {
        self.dir.join(format!("{}.{}{}", self.file_name, pid, PARTIAL_SUFFIX))
    }

    #[tracing::instrument(skip(self, runtime))]
    pub fn state<R: Runtime>(&self, runtime: &R) -> CacheState {
        if runtime.exists(&self.path()) {
            CacheState::Present
        } else {
            CacheState::Absent
        }
    }

    /// Creates the version's subdirectory and any missing parents.
    #[tracing::instrument(skip(self, runtime))]
    pub fn prepare<R: Runtime>(&self, runtime: &R) -> Result<()> {
        debug!("Creating cache directory: {:?}", self.dir);
        runtime
            .create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create cache directory at {:?}", self.dir))
    }
}
