use crate::domain::model::EntryList;
use crate::utils::error::Result;

pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    /// Creates or truncates `path`, then writes `data` in full.
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn input_path(&self) -> &str;
    fn output_path(&self) -> &str;
}

pub trait Pipeline {
    fn extract(&self) -> Result<String>;
    fn transform(&self, text: String) -> Result<EntryList>;
    fn load(&self, entries: &EntryList) -> Result<String>;
}
