pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{toml_config::TomlConfig, Channel};

pub use adapters::{http::HttpFeedFetcher, storage::LocalStorage};
pub use crate::core::{etl::EtlEngine, pipeline::ReleasePipeline, processor::EntryProcessor};
pub use domain::model::{FeedEntry, ReleaseRecord, ReleaseSet};
pub use utils::error::{FeedError, Result};
