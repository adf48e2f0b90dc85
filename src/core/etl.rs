use crate::core::Pipeline;
use crate::domain::model::RunSummary;
use crate::utils::error::Result;
use std::time::Instant;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn pipeline(&self) -> &P {
        &self.pipeline
    }

    /// Runs extract, transform and load in order. The first failure aborts the run.
    pub fn run(&self) -> Result<RunSummary> {
        let start = Instant::now();
        tracing::info!("Starting conversion");

        // Extract
        let text = self.pipeline.extract()?;

        // Transform
        let entries = self.pipeline.transform(text)?;
        tracing::info!("Collected {} entries", entries.len());

        // Load
        let output_path = self.pipeline.load(&entries)?;
        tracing::info!(
            "Output saved to: {} ({:.2?})",
            output_path,
            start.elapsed()
        );

        Ok(RunSummary {
            output_path,
            entry_count: entries.len(),
        })
    }
}
