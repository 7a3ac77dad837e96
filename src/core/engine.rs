use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct ClassifierEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ClassifierEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Runs all three stages and returns the rendered report. Nothing is
    /// returned unless every stage succeeds.
    pub fn run(&self) -> Result<String> {
        tracing::info!("Extracting records...");
        let records = self.pipeline.extract()?;
        tracing::info!("Extracted {} records", records.len());

        let classification = self.pipeline.transform(records)?;
        tracing::info!(
            "Classified as {}{}",
            classification.status,
            classification.key
        );

        self.pipeline.load(classification)
    }
}
