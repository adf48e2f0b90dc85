use crate::core::{ConfigProvider, EntryList, Pipeline, Storage};
use crate::domain::model::split_lines;
use crate::utils::error::{EtlError, Result};
use crate::utils::json::to_ascii_pretty_vec;

/// Reads the entry file, keeps its non-blank lines and writes them out as a JSON array.
pub struct ListPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> ListPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for ListPipeline<S, C> {
    fn extract(&self) -> Result<String> {
        let path = self.config.input_path();
        tracing::debug!("Reading entries from: {}", path);

        let raw = self.storage.read_file(path)?;
        tracing::debug!("Read {} bytes", raw.len());

        String::from_utf8(raw).map_err(|source| EtlError::DecodingError {
            path: path.to_string(),
            source,
        })
    }

    fn transform(&self, text: String) -> Result<EntryList> {
        let entries = EntryList::from_lines(split_lines(&text));
        tracing::debug!("Kept {} non-blank lines", entries.len());
        Ok(entries)
    }

    fn load(&self, entries: &EntryList) -> Result<String> {
        let path = self.config.output_path();
        let json = to_ascii_pretty_vec(entries)?;

        tracing::debug!("Writing {} bytes to: {}", json.len(), path);
        self.storage.write_file(path, &json)?;

        Ok(path.to_string())
    }
}
