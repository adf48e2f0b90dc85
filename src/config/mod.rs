pub mod cli;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_file_name, Validate};

/// Entry file read from the working directory.
pub const INPUT_FILE: &str = "list.txt";
/// JSON file written next to it.
pub const OUTPUT_FILE: &str = "list.json";

/// The fixed `list.txt` → `list.json` pair.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedPaths;

impl ConfigProvider for FixedPaths {
    fn input_path(&self) -> &str {
        INPUT_FILE
    }

    fn output_path(&self) -> &str {
        OUTPUT_FILE
    }
}

/// The built-in providers name fixed files; this guards other `ConfigProvider`s
/// that supply their own names.
impl<C: ConfigProvider> Validate for C {
    fn validate(&self) -> Result<()> {
        validate_file_name("input_path", self.input_path())?;
        validate_file_name("output_path", self.output_path())?;
        Ok(())
    }
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, clap::Parser)]
#[command(name = "list-json")]
#[command(version)]
#[command(about = "Convert list.txt into a JSON array in list.json")]
pub struct CliConfig {
    /// Log progress to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &str {
        INPUT_FILE
    }

    fn output_path(&self) -> &str {
        OUTPUT_FILE
    }
}
