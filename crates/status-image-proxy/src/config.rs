//! Command-line configuration

use crate::error::Result;
use clap::Parser;
use status_origin_client::{DEFAULT_ORIGIN_URL, DEFAULT_TIMEOUT_SECS};
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

pub const DEFAULT_FIXTURE_PATH: &str = "test_images/cat.jpg";

/// Read-through cache for status code images
#[derive(Debug, Parser)]
#[command(name = "status-image-proxy", version, about, disable_help_flag = true)]
pub struct Cli {
    /// Server host
    #[arg(short = 'h', long, env = "STATUS_PROXY_HOST")]
    pub host: String,

    /// Server port
    #[arg(short, long, env = "STATUS_PROXY_PORT")]
    pub port: u16,

    /// Cache directory path
    #[arg(short, long, env = "STATUS_PROXY_CACHE_DIR")]
    pub cache: PathBuf,

    /// Origin base URL; images are fetched from `<origin>/<code>`
    #[arg(long, env = "STATUS_PROXY_ORIGIN_URL", default_value = DEFAULT_ORIGIN_URL)]
    pub origin: Url,

    /// Origin request timeout in seconds
    #[arg(long, env = "STATUS_PROXY_ORIGIN_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub origin_timeout_secs: u64,

    /// Image copied into the cache on PUT
    #[arg(long, env = "STATUS_PROXY_FIXTURE", default_value = DEFAULT_FIXTURE_PATH)]
    pub fixture: PathBuf,

    /// Print help
    #[arg(long, action = clap::ArgAction::Help)]
    #[allow(dead_code)]
    help: Option<bool>,
}

/// Resolved configuration handed to the server
#[derive(Debug, Clone)]
pub struct ProxyConfig {
    pub host: String,
    pub port: u16,
    pub cache_dir: PathBuf,
    pub origin_url: String,
    pub origin_timeout: Duration,
    pub fixture_path: PathBuf,
}

impl Cli {
    /// Resolve the cache directory against the current working directory
    ///
    /// The fixture path is kept as given so PUT confirmations echo it; a
    /// relative fixture is still read relative to the working directory.
    pub fn into_config(self) -> Result<ProxyConfig> {
        let cwd = std::env::current_dir()?;
        Ok(self.into_config_relative_to(&cwd))
    }

    fn into_config_relative_to(self, base: &Path) -> ProxyConfig {
        ProxyConfig {
            host: self.host,
            port: self.port,
            cache_dir: base.join(self.cache),
            origin_url: self.origin.as_str().trim_end_matches('/').to_string(),
            origin_timeout: Duration::from_secs(self.origin_timeout_secs),
            fixture_path: self.fixture,
        }
    }
}
