use crate::domain::model::{FeedEntry, ReleaseSet};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub const AVAILABLE_MARKER: &str = "The following versions are now available in the";
pub const UNAVAILABLE_MARKER: &str = "The following versions are no longer available in the";

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait FeedFetcher: Send + Sync {
    fn fetch(&self, url: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn feed_url(&self) -> &str;
    /// 設定後改讀本地檔案，不走網路
    fn feed_file(&self) -> Option<&str>;
    fn output_path(&self) -> &str;
    fn request_timeout(&self) -> Duration;

    fn available_marker(&self) -> &str {
        AVAILABLE_MARKER
    }

    fn unavailable_marker(&self) -> &str {
        UNAVAILABLE_MARKER
    }
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<FeedEntry>>;
    async fn transform(&self, entries: Vec<FeedEntry>) -> Result<ReleaseSet>;
    async fn load(&self, releases: ReleaseSet) -> Result<String>;
}
