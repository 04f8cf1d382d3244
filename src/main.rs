use anyhow::Result;
use clap::Parser;
use graalcache::commands::{self, GraalOptions};
use graalcache::config::{DEFAULT_DOWNLOAD_BASE_URL, DEFAULT_GRAAL_VERSION};
use std::path::PathBuf;

/// graalcache - GraalVM CE download cache
///
/// Downloads the GraalVM Community Edition archive for this machine into a
/// version-keyed cache directory. Nothing is downloaded if the archive is
/// already cached.
///
/// Examples:
///   graalcache fetch                          # Fetch the default version
///   graalcache --graal-version 19.3.1 fetch   # Fetch a specific version
///   graalcache locate --json                  # Show URL and cache path
#[derive(Parser, Debug)]
#[command(author, version = env!("GRAALCACHE_BUILD_VERSION"), about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// GraalVM CE version to fetch
    #[arg(
        long = "graal-version",
        env = "GRAALCACHE_VERSION",
        value_name = "VERSION",
        default_value = DEFAULT_GRAAL_VERSION,
        global = true
    )]
    pub graal_version: String,

    /// Base URL the archives are published under
    #[arg(
        long = "base-url",
        env = "GRAALCACHE_BASE_URL",
        value_name = "URL",
        default_value = DEFAULT_DOWNLOAD_BASE_URL,
        global = true
    )]
    pub base_url: String,

    /// Cache root directory (defaults to the user cache directory)
    #[arg(
        long = "cache-dir",
        env = "GRAALCACHE_CACHE_DIR",
        value_name = "PATH",
        global = true
    )]
    pub cache_dir: Option<PathBuf>,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Download the archive unless it is already cached
    Fetch(FetchArgs),

    /// Print the download URL and cache path without downloading
    Locate(LocateArgs),
}

#[derive(clap::Args, Debug)]
pub struct FetchArgs {}

#[derive(clap::Args, Debug)]
pub struct LocateArgs {
    /// Print a JSON object instead of text
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    fn options(&self) -> GraalOptions {
        GraalOptions {
            version: self.graal_version.clone(),
            base_url: self.base_url.clone(),
            cache_dir: self.cache_dir.clone(),
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let runtime = graalcache::runtime::RealRuntime;
    let options = cli.options();

    match cli.command {
        Commands::Fetch(_args) => commands::fetch(runtime, options).await?,
        Commands::Locate(args) => commands::locate(runtime, options, args.json)?,
    }
    Ok(())
}
