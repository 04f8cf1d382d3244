//! Inputs of a fetch: GraalVM version, download base URL and cache root.

use anyhow::{Context, Result};
use log::debug;
use reqwest::Url;
use std::path::{Path, PathBuf};

use crate::error::GraalError;
use crate::runtime::Runtime;

pub const DEFAULT_GRAAL_VERSION: &str = "19.2.0";

pub const DEFAULT_DOWNLOAD_BASE_URL: &str = "https://github.com/oracle/graal/releases/download";

/// Directory created under the user's cache directory.
pub const CACHE_DIR_NAME: &str = "graalcache";

/// Fallback under the home directory when the platform has no cache directory.
pub const HOME_CACHE_DIR_NAME: &str = ".graalcache";

/// Validated, immutable inputs of one fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraalConfig {
    version: String,
    base_url: String,
    cache_root: PathBuf,
}

impl GraalConfig {
    /// Validates the inputs. Trailing slashes are stripped from `base_url`.
    pub fn new(
        version: impl Into<String>,
        base_url: impl Into<String>,
        cache_root: impl Into<PathBuf>,
    ) -> Result<Self, GraalError> {
        let version = version.into();
        let base_url = base_url.into();
        let cache_root = cache_root.into();

        validate_version(&version)?;
        let base_url = normalize_base_url(&base_url)?;
        if cache_root.as_os_str().is_empty() {
            return Err(GraalError::InvalidConfig(
                "cache directory must not be empty".to_string(),
            ));
        }

        Ok(Self {
            version,
            base_url,
            cache_root,
        })
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn cache_root(&self) -> &Path {
        &self.cache_root
    }
}

fn validate_version(version: &str) -> Result<(), GraalError> {
    if version.is_empty() {
        return Err(GraalError::InvalidConfig(
            "GraalVM version must not be empty".to_string(),
        ));
    }
    // The version names a cache subdirectory and a URL path segment.
    let allowed = |c: char| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_' | '+');
    if version == "." || version == ".." || !version.chars().all(allowed) {
        return Err(GraalError::InvalidConfig(format!(
            "GraalVM version '{}' may only contain letters, digits, '.', '-', '_' and '+'",
            version
        )));
    }
    Ok(())
}

fn normalize_base_url(base_url: &str) -> Result<String, GraalError> {
    let trimmed = base_url.trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(GraalError::InvalidConfig(
            "download base URL must not be empty".to_string(),
        ));
    }

    let parsed = Url::parse(trimmed).map_err(|e| {
        GraalError::InvalidConfig(format!("download base URL '{}' is invalid: {}", base_url, e))
    })?;
    if !matches!(parsed.scheme(), "http" | "https") || !parsed.has_host() {
        return Err(GraalError::InvalidConfig(format!(
            "download base URL '{}' must be an http or https URL",
            base_url
        )));
    }

    Ok(trimmed.to_string())
}

/// Default cache root: `<cache dir>/graalcache`, else `~/.graalcache`.
#[tracing::instrument(skip(runtime))]
pub fn default_cache_root<R: Runtime>(runtime: &R) -> Result<PathBuf> {
    if let Some(cache_dir) = runtime.cache_dir() {
        return Ok(cache_dir.join(CACHE_DIR_NAME));
    }
    debug!("No user cache directory, falling back to the home directory");
    let home_dir = runtime
        .home_dir()
        .context("Could not find a cache or home directory; pass --cache-dir")?;
    Ok(home_dir.join(HOME_CACHE_DIR_NAME))
}
