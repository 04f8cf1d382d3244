use anyhow::Result;
use std::sync::Arc;

use super::config::{Config, GraalOptions};
use crate::application::{FetchGraal, FetchOutcome};
use crate::cleanup::new_shared;
use crate::download::Downloader;
use crate::runtime::Runtime;

/// Download the configured GraalVM archive unless it is already cached.
#[tracing::instrument(skip(runtime, options))]
pub async fn fetch<R: Runtime + 'static>(runtime: R, options: GraalOptions) -> Result<()> {
    let config = Config::new(runtime, options)?;
    let outcome = run(config).await?;
    println!("{}", describe(&outcome));
    Ok(())
}

#[tracing::instrument(skip(config))]
pub async fn run<R: Runtime, D: Downloader>(config: Config<R, D>) -> Result<FetchOutcome> {
    let cleanup_ctx = new_shared();
    let cleanup_ctx_clone = Arc::clone(&cleanup_ctx);

    // Remove the partial download if interrupted
    let ctrl_c_handler = tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            eprintln!("\nInterrupted, cleaning up...");
            if let Ok(ctx) = cleanup_ctx_clone.lock() {
                ctx.cleanup();
            }
            std::process::exit(130);
        }
    });

    let use_case = FetchGraal::new(config.runtime, config.downloader, cleanup_ctx);
    let result = use_case.fetch(&config.graal).await;

    ctrl_c_handler.abort();

    result
}

/// One-line summary printed after a fetch.
pub fn describe(outcome: &FetchOutcome) -> String {
    match outcome {
        FetchOutcome::Cached { path } => format!("cached {}", path.display()),
        FetchOutcome::Downloaded { path, bytes } => {
            format!("downloaded {} ({} bytes)", path.display(), bytes)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GraalConfig;
    use crate::download::MockDownloader;
    use crate::test_utils::FixedHostRuntime;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::tempdir;

    #[test]
    fn test_describe() {
        let path = PathBuf::from("/c/19.3.1/graalvm-ce-amd64-19.3.1.tar.gz");
        let cached = FetchOutcome::Cached { path: path.clone() };
        assert_eq!(describe(&cached), format!("cached {}", path.display()));

        let downloaded = FetchOutcome::Downloaded {
            path: PathBuf::from("/c/x.tar.gz"),
            bytes: 42,
        };
        assert!(describe(&downloaded).starts_with("downloaded "));
        assert!(describe(&downloaded).ends_with("(42 bytes)"));
    }

    #[tokio::test]
    async fn test_run_downloads_into_cache() {
        let dir = tempdir().unwrap();

        let mut downloader = MockDownloader::new();
        downloader
            .expect_download()
            .times(1)
            .returning(|_, mut writer| {
                writer.write_all(b"archive")?;
                writer.flush()?;
                Ok(7)
            });

        let config = Config {
            runtime: FixedHostRuntime::linux(),
            downloader,
            graal: GraalConfig::new("19.3.1", "https://example.org/graal", dir.path()).unwrap(),
        };

        let outcome = run(config).await.unwrap();

        assert_eq!(
            outcome,
            FetchOutcome::Downloaded {
                path: dir.path().join("19.3.1").join("graalvm-ce-amd64-19.3.1.tar.gz"),
                bytes: 7,
            }
        );
    }
}
