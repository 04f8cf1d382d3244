//! Platform resolution.
//!
//! Maps the host's operating system and CPU architecture to the tokens used
//! in GraalVM CE archive names. Only macOS and Linux on x86_64 are published
//! under this naming scheme; every other host is rejected.

use anyhow::Result;

use crate::error::GraalError;
use crate::runtime::Runtime;

/// Operating systems with a GraalVM CE archive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatingSystem {
    MacOs,
    Linux,
}

impl OperatingSystem {
    /// Parses an identifier in `std::env::consts::OS` form.
    pub fn from_host(id: &str) -> Result<Self, GraalError> {
        match id {
            "macos" => Ok(OperatingSystem::MacOs),
            "linux" => Ok(OperatingSystem::Linux),
            other => Err(GraalError::UnsupportedOperatingSystem(other.to_string())),
        }
    }

    /// Vendor token used in the archive name.
    pub fn token(self) -> &'static str {
        match self {
            OperatingSystem::MacOs => "macos",
            OperatingSystem::Linux => "linux",
        }
    }
}

/// CPU architectures with a GraalVM CE archive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Architecture {
    Amd64,
}

impl Architecture {
    /// Parses an identifier in `std::env::consts::ARCH` form.
    pub fn from_host(id: &str) -> Result<Self, GraalError> {
        match id {
            "x86_64" => Ok(Architecture::Amd64),
            other => Err(GraalError::UnsupportedArchitecture(other.to_string())),
        }
    }

    /// Vendor token used in the archive name.
    pub fn token(self) -> &'static str {
        match self {
            Architecture::Amd64 => "amd64",
        }
    }
}

/// A supported host platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Platform {
    pub os: OperatingSystem,
    pub arch: Architecture,
}

impl Platform {
    /// Resolves raw host identifiers. The operating system is checked first.
    pub fn resolve(os: &str, arch: &str) -> Result<Self, GraalError> {
        Ok(Self {
            os: OperatingSystem::from_host(os)?,
            arch: Architecture::from_host(arch)?,
        })
    }

    /// Resolves the platform the runtime reports.
    #[tracing::instrument(skip(runtime))]
    pub fn detect<R: Runtime>(runtime: &R) -> Result<Self> {
        let platform = Self::resolve(&runtime.host_os(), &runtime.host_arch())?;
        log::debug!(
            "Resolved platform: os={}, arch={}",
            platform.os.token(),
            platform.arch.token()
        );
        Ok(platform)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::MockRuntime;

    #[test]
    fn test_resolve_supported_platforms() {
        let linux = Platform::resolve("linux", "x86_64").unwrap();
        assert_eq!(linux.os.token(), "linux");
        assert_eq!(linux.arch.token(), "amd64");

        let mac = Platform::resolve("macos", "x86_64").unwrap();
        assert_eq!(mac.os.token(), "macos");
        assert_eq!(mac.arch.token(), "amd64");
    }

    #[test]
    fn test_resolve_unsupported_os() {
        for os in ["windows", "freebsd", "ios", "", "Linux"] {
            let err = Platform::resolve(os, "x86_64").unwrap_err();
            assert!(
                matches!(err, GraalError::UnsupportedOperatingSystem(ref v) if v == os),
                "unexpected error for {:?}: {:?}",
                os,
                err
            );
        }
    }

    #[test]
    fn test_resolve_unsupported_arch() {
        for arch in ["aarch64", "x86", "arm", "riscv64", "amd64", ""] {
            let err = Platform::resolve("linux", arch).unwrap_err();
            assert!(
                matches!(err, GraalError::UnsupportedArchitecture(ref v) if v == arch),
                "unexpected error for {:?}: {:?}",
                arch,
                err
            );
        }
    }

    #[test]
    fn test_resolve_reports_os_before_arch() {
        let err = Platform::resolve("windows", "aarch64").unwrap_err();
        assert!(matches!(err, GraalError::UnsupportedOperatingSystem(_)));
    }

    #[test]
    fn test_detect_uses_runtime_identifiers() {
        let mut runtime = MockRuntime::new();
        runtime
            .expect_host_os()
            .returning(|| "macos".to_string());
        runtime
            .expect_host_arch()
            .returning(|| "x86_64".to_string());

        let platform = Platform::detect(&runtime).unwrap();
        assert_eq!(
            platform,
            Platform {
                os: OperatingSystem::MacOs,
                arch: Architecture::Amd64,
            }
        );
    }

    #[test]
    fn test_detect_unsupported_arch_is_typed() {
        let mut runtime = MockRuntime::new();
        runtime
            .expect_host_os()
            .returning(|| "linux".to_string());
        runtime
            .expect_host_arch()
            .returning(|| "aarch64".to_string());

        let err = Platform::detect(&runtime).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<GraalError>(),
            Some(GraalError::UnsupportedArchitecture(arch)) if arch == "aarch64"
        ));
    }
}
