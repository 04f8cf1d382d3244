use anyhow::Result;
use log::debug;
use reqwest::Client;
use std::path::PathBuf;

use crate::{
    config::{GraalConfig, default_cache_root},
    download::{Downloader, HttpDownloader},
    http::HttpClient,
    runtime::Runtime,
};

pub const USER_AGENT: &str = concat!("graalcache/", env!("CARGO_PKG_VERSION"));

/// Raw, unvalidated inputs as collected from the command line and environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraalOptions {
    pub version: String,
    pub base_url: String,
    /// `None` selects the default cache root.
    pub cache_dir: Option<PathBuf>,
}

impl GraalOptions {
    /// Validates the options, looking up the default cache root if needed.
    pub fn resolve<R: Runtime>(self, runtime: &R) -> Result<GraalConfig> {
        let cache_root = match self.cache_dir {
            Some(path) => path,
            None => default_cache_root(runtime)?,
        };
        debug!("Using cache root: {}", cache_root.display());

        Ok(GraalConfig::new(self.version, self.base_url, cache_root)?)
    }
}

/// Validated configuration plus the services a command needs.
pub struct Config<R: Runtime, D: Downloader> {
    pub runtime: R,
    pub downloader: D,
    pub graal: GraalConfig,
}

impl<R: Runtime> Config<R, HttpDownloader> {
    pub fn new(runtime: R, options: GraalOptions) -> Result<Self> {
        let graal = options.resolve(&runtime)?;

        let client = Client::builder().user_agent(USER_AGENT).build()?;
        let downloader = HttpDownloader::new(HttpClient::new(client));

        Ok(Self {
            runtime,
            downloader,
            graal,
        })
    }
}
