use crate::core::Pipeline;
use crate::utils::error::Result;
use std::time::Instant;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        let started = Instant::now();
        tracing::info!("Starting release extraction");

        // Extract
        let entries = self.pipeline.extract().await?;
        tracing::info!("Parsed {} feed entries", entries.len());

        // Transform
        let releases = self.pipeline.transform(entries).await?;
        tracing::info!("Extracted {} releases", releases.len());

        // Load
        let output_path = self.pipeline.load(releases).await?;
        tracing::info!("Output saved to: {} ({:?})", output_path, started.elapsed());

        Ok(output_path)
    }
}
