//! Host identification and user directories.

use std::env;
use std::path::PathBuf;

use super::RealRuntime;

impl RealRuntime {
    #[tracing::instrument(skip(self))]
    pub(crate) fn host_os_impl(&self) -> String {
        env::consts::OS.to_string()
    }

    #[tracing::instrument(skip(self))]
    pub(crate) fn host_arch_impl(&self) -> String {
        env::consts::ARCH.to_string()
    }

    #[tracing::instrument(skip(self))]
    pub(crate) fn home_dir_impl(&self) -> Option<PathBuf> {
        dirs::home_dir()
    }

    #[tracing::instrument(skip(self))]
    pub(crate) fn cache_dir_impl(&self) -> Option<PathBuf> {
        dirs::cache_dir()
    }
}
