use crate::config::{Channel, DEFAULT_TIMEOUT_SECONDS, MAX_TIMEOUT_SECONDS};
use crate::core::ConfigProvider;
use crate::domain::ports::{AVAILABLE_MARKER, UNAVAILABLE_MARKER};
use crate::utils::error::{FeedError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

static ENV_VAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("valid env var pattern"));

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub extract: ExtractConfig,
    pub load: LoadConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceConfig {
    #[serde(default)]
    pub channel: Channel,
    pub feed_url: Option<String>,
    pub feed_file: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractConfig {
    pub available_marker: Option<String>,
    pub unavailable_marker: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoadConfig {
    pub output_path: String,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| FeedError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${FEED_MIRROR})，未設定者保留原字串
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| caps[0].to_string())
            })
            .into_owned()
    }
}

impl ConfigProvider for TomlConfig {
    fn feed_url(&self) -> &str {
        self.source
            .feed_url
            .as_deref()
            .unwrap_or_else(|| self.source.channel.feed_url())
    }

    fn feed_file(&self) -> Option<&str> {
        self.source.feed_file.as_deref()
    }

    fn output_path(&self) -> &str {
        &self.load.output_path
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.source.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS))
    }

    fn available_marker(&self) -> &str {
        self.extract
            .available_marker
            .as_deref()
            .unwrap_or(AVAILABLE_MARKER)
    }

    fn unavailable_marker(&self) -> &str {
        self.extract
            .unavailable_marker
            .as_deref()
            .unwrap_or(UNAVAILABLE_MARKER)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("load.output_path", &self.load.output_path)?;

        match &self.source.feed_file {
            Some(path) if self.source.feed_url.is_some() => {
                return Err(FeedError::ConfigValidationError {
                    field: "source".to_string(),
                    message: format!(
                        "feed_url and feed_file are mutually exclusive (feed_file = {})",
                        path
                    ),
                });
            }
            Some(path) => validation::validate_path("source.feed_file", path)?,
            None => validation::validate_url("source.feed_url", self.feed_url())?,
        }

        if let Some(timeout) = self.source.timeout_seconds {
            validation::validate_range("source.timeout_seconds", timeout, 1, MAX_TIMEOUT_SECONDS)?;
        }

        validation::validate_non_empty_string("extract.available_marker", self.available_marker())?;
        validation::validate_non_empty_string("extract.unavailable_marker", self.unavailable_marker())?;

        tracing::debug!("TOML configuration validation passed");
        Ok(())
    }
}
