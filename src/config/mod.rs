pub mod channel;
pub mod toml_config;

pub use channel::Channel;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::time::Duration;

pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
pub const MAX_TIMEOUT_SECONDS: u64 = 600;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "gke-release-feed")]
#[command(about = "Convert a GKE release-channel feed into a Renovate custom datasource")]
pub struct CliConfig {
    /// GKE release channel
    #[arg(long, value_enum, default_value_t = Channel::Stable)]
    pub channel: Channel,

    /// Output JSON file
    #[arg(long, required_unless_present = "config")]
    pub out: Option<String>,

    /// Override the channel's feed URL
    #[arg(long)]
    pub feed_url: Option<String>,

    /// Read the feed from a local file instead of fetching it
    #[arg(long, conflicts_with = "feed_url")]
    pub feed_file: Option<String>,

    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECONDS)]
    pub timeout_seconds: u64,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,

    /// Show the resolved configuration without fetching or writing
    #[arg(long)]
    pub dry_run: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn feed_url(&self) -> &str {
        self.feed_url
            .as_deref()
            .unwrap_or_else(|| self.channel.feed_url())
    }

    fn feed_file(&self) -> Option<&str> {
        self.feed_file.as_deref()
    }

    fn output_path(&self) -> &str {
        self.out.as_deref().unwrap_or_default()
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        let out = validation::validate_required_field("out", &self.out)?;
        validation::validate_path("out", out)?;

        match &self.feed_file {
            Some(path) => validation::validate_path("feed_file", path)?,
            None => validation::validate_url("feed_url", self.feed_url())?,
        }

        validation::validate_range("timeout_seconds", self.timeout_seconds, 1, MAX_TIMEOUT_SECONDS)?;

        tracing::debug!("CLI configuration validation passed");
        Ok(())
    }
}
