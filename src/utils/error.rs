use thiserror::Error;

#[derive(Error, Debug)]
pub enum FeedError {
    #[error("Feed request failed: {0}")]
    FeedFetchError(#[from] reqwest::Error),

    #[error("Malformed feed: {message}")]
    MalformedFeedError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },
}

impl From<quick_xml::DeError> for FeedError {
    fn from(err: quick_xml::DeError) -> Self {
        FeedError::MalformedFeedError {
            message: err.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Parse,
    Io,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl FeedError {
    pub fn malformed(message: impl Into<String>) -> Self {
        FeedError::MalformedFeedError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            FeedError::FeedFetchError(_) => ErrorCategory::Network,
            FeedError::MalformedFeedError { .. } => ErrorCategory::Parse,
            FeedError::IoError(_) | FeedError::SerializationError(_) => ErrorCategory::Io,
            FeedError::ConfigError { .. }
            | FeedError::MissingConfigError { .. }
            | FeedError::InvalidConfigValueError { .. }
            | FeedError::ConfigValidationError { .. } => ErrorCategory::Configuration,
        }
    }

    /// 網路錯誤可重試，輸出寫入失敗視為系統錯誤
    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Parse | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            FeedError::FeedFetchError(_) => {
                "Check network connectivity and the feed URL, then retry"
            }
            FeedError::MalformedFeedError { .. } => {
                "Make sure the source is an Atom feed with RFC 3339 <updated> timestamps"
            }
            FeedError::IoError(_) => "Check that the output directory exists and is writable",
            FeedError::SerializationError(_) => "Report this as a bug; release data could not be encoded",
            FeedError::ConfigError { .. } | FeedError::ConfigValidationError { .. } => {
                "Review the configuration file and command-line flags"
            }
            FeedError::MissingConfigError { .. } => "Provide the missing setting via flag or config file",
            FeedError::InvalidConfigValueError { .. } => {
                "Correct the highlighted value; channels are stable, regular or rapid"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            FeedError::FeedFetchError(e) => match e.status() {
                Some(status) => format!("Feed server responded with {}", status),
                None => format!("Could not reach the release feed: {}", e),
            },
            FeedError::MalformedFeedError { message } => {
                format!("The release feed could not be parsed: {}", message)
            }
            FeedError::IoError(e) => format!("File operation failed: {}", e),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FeedError>;
