use anyhow::{Context, Result};
use serde::Serialize;
use std::path::PathBuf;

use super::config::GraalOptions;
use crate::application::locate_artifact;
use crate::cache::CacheState;
use crate::config::GraalConfig;
use crate::runtime::Runtime;

/// Resolved location of the archive, as printed by `locate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocateReport {
    pub version: String,
    pub os: String,
    pub arch: String,
    pub url: String,
    pub file_name: String,
    pub cache_dir: PathBuf,
    pub path: PathBuf,
    pub cached: bool,
}

/// Print where the archive comes from and where it is cached, without downloading.
#[tracing::instrument(skip(runtime, options))]
pub fn locate<R: Runtime>(runtime: R, options: GraalOptions, json: bool) -> Result<()> {
    let config = options.resolve(&runtime)?;
    let report = report(&runtime, &config)?;

    if json {
        let out = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        println!("{}", out);
    } else {
        print!("{}", render_text(&report));
    }
    Ok(())
}

pub fn report<R: Runtime>(runtime: &R, config: &GraalConfig) -> Result<LocateReport> {
    let location = locate_artifact(runtime, config)?;
    let entry = location.entry();

    Ok(LocateReport {
        version: config.version().to_string(),
        os: location.platform().os.token().to_string(),
        arch: location.platform().arch.token().to_string(),
        url: location.url().to_string(),
        file_name: entry.file_name().to_string(),
        cache_dir: entry.dir().to_path_buf(),
        path: entry.path(),
        cached: location.state(runtime) == CacheState::Present,
    })
}

pub fn render_text(report: &LocateReport) -> String {
    format!(
        "version: {}\nplatform: {}-{}\nurl: {}\npath: {}\ncached: {}\n",
        report.version,
        report.os,
        report.arch,
        report.url,
        report.path.display(),
        if report.cached { "yes" } else { "no" }
    )
}
