use crate::adapters::atom;
use crate::core::processor::EntryProcessor;
use crate::core::segmenter::ContentSegmenter;
use crate::core::{ConfigProvider, FeedEntry, FeedFetcher, Pipeline, ReleaseSet, Storage};
use crate::utils::error::Result;

pub struct ReleasePipeline<S: Storage, C: ConfigProvider, F: FeedFetcher> {
    storage: S,
    config: C,
    fetcher: F,
    processor: EntryProcessor,
}

impl<S: Storage, C: ConfigProvider, F: FeedFetcher> ReleasePipeline<S, C, F> {
    pub fn new(storage: S, config: C, fetcher: F) -> Self {
        let segmenter =
            ContentSegmenter::new(config.available_marker(), config.unavailable_marker());
        Self {
            storage,
            config,
            fetcher,
            processor: EntryProcessor::new(segmenter),
        }
    }
}

/// 兩格縮排、結尾換行
pub fn encode_releases(releases: &ReleaseSet) -> Result<Vec<u8>> {
    let mut json = serde_json::to_vec_pretty(releases)?;
    json.push(b'\n');
    Ok(json)
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider, F: FeedFetcher> Pipeline for ReleasePipeline<S, C, F> {
    async fn extract(&self) -> Result<Vec<FeedEntry>> {
        let body = match self.config.feed_file() {
            Some(path) => {
                tracing::debug!("Reading feed from file: {}", path);
                self.storage.read_file(path).await?
            }
            None => self.fetcher.fetch(self.config.feed_url()).await?,
        };

        atom::parse_feed(&body)
    }

    async fn transform(&self, entries: Vec<FeedEntry>) -> Result<ReleaseSet> {
        Ok(self.processor.process(&entries))
    }

    async fn load(&self, releases: ReleaseSet) -> Result<String> {
        let output_path = self.config.output_path();
        let json = encode_releases(&releases)?;

        tracing::debug!("Writing {} releases ({} bytes)", releases.len(), json.len());
        self.storage.write_file(output_path, &json).await?;

        Ok(output_path.to_string())
    }
}
