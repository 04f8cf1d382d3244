//! Naming of GraalVM CE archives.
//!
//! The download URL and the cached file name are both rendered from fixed
//! patterns using the placeholders `url`, `version`, `os` and `arch`.

mod template;

pub use template::{TemplateError, render};

use crate::platform::Platform;

/// Where a GraalVM CE archive is published.
pub const ARTIFACT_PATTERN: &str = "[url]/vm-[version]/graalvm-ce-[os]-[arch]-[version].tar.gz";

/// Name of the archive inside the version's cache directory.
pub const FILENAME_PATTERN: &str = "graalvm-ce-[arch]-[version].tar.gz";

/// Renders the download URL and file name for one version on one platform.
#[derive(Debug, Clone)]
pub struct ArtifactLocator<'a> {
    version: &'a str,
    base_url: &'a str,
    platform: Platform,
}

impl<'a> ArtifactLocator<'a> {
    pub fn new(version: &'a str, base_url: &'a str, platform: Platform) -> Self {
        Self {
            version,
            base_url,
            platform,
        }
    }

    pub fn url(&self) -> Result<String, TemplateError> {
        render(ARTIFACT_PATTERN, &self.values())
    }

    pub fn file_name(&self) -> Result<String, TemplateError> {
        render(FILENAME_PATTERN, &self.values())
    }

    fn values(&self) -> [(&'static str, &str); 4] {
        [
            ("url", self.base_url),
            ("version", self.version),
            ("os", self.platform.os.token()),
            ("arch", self.platform.arch.token()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{Architecture, OperatingSystem};

    fn linux() -> Platform {
        Platform {
            os: OperatingSystem::Linux,
            arch: Architecture::Amd64,
        }
    }

    #[test]
    fn test_locator_linux_scenario() {
        let locator = ArtifactLocator::new("19.3.1", "https://example.org/graal", linux());

        assert_eq!(
            locator.url().unwrap(),
            "https://example.org/graal/vm-19.3.1/graalvm-ce-linux-amd64-19.3.1.tar.gz"
        );
        assert_eq!(locator.file_name().unwrap(), "graalvm-ce-amd64-19.3.1.tar.gz");
    }

    #[test]
    fn test_locator_macos() {
        let platform = Platform {
            os: OperatingSystem::MacOs,
            arch: Architecture::Amd64,
        };
        let locator = ArtifactLocator::new("19.2.0", "https://mirror.local", platform);

        assert_eq!(
            locator.url().unwrap(),
            "https://mirror.local/vm-19.2.0/graalvm-ce-macos-amd64-19.2.0.tar.gz"
        );
        // The file name carries no OS token.
        assert_eq!(locator.file_name().unwrap(), "graalvm-ce-amd64-19.2.0.tar.gz");
    }

    #[test]
    fn test_locator_output_has_no_placeholders() {
        for version in ["1.0.0-rc5", "19.3.1", "20.0.0"] {
            let locator = ArtifactLocator::new(version, "http://localhost:8080/base", linux());
            for rendered in [locator.url().unwrap(), locator.file_name().unwrap()] {
                for token in ["[url]", "[version]", "[os]", "[arch]"] {
                    assert!(!rendered.contains(token), "{} in {}", token, rendered);
                }
                assert!(rendered.contains(version));
            }
        }
    }
}
