pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{cli::LocalStorage, FixedPaths, INPUT_FILE, OUTPUT_FILE};
pub use core::{etl::EtlEngine, pipeline::ListPipeline};
pub use domain::model::{EntryList, RunSummary};
pub use utils::error::{EtlError, Result};

use std::path::Path;

/// Converts `list.txt` in `dir` into `list.json` and returns the entry count.
pub fn run_in(dir: impl AsRef<Path>) -> Result<usize> {
    let pipeline = ListPipeline::new(LocalStorage::new(dir.as_ref()), FixedPaths);
    let summary = EtlEngine::new(pipeline).run()?;
    Ok(summary.entry_count)
}

/// [`run_in`] for the current working directory.
pub fn run() -> Result<usize> {
    run_in(".")
}
