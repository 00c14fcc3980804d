pub mod dedup;
pub mod etl;
pub mod matcher;
pub mod pipeline;
pub mod processor;
pub mod segmenter;

pub use crate::domain::model::{FeedEntry, ReleaseRecord, ReleaseSet};
pub use crate::domain::ports::{ConfigProvider, FeedFetcher, Pipeline, Storage};
pub use crate::utils::error::Result;
