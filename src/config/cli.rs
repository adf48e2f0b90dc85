use crate::core::Storage;
use crate::utils::error::{EtlError, Result};
use std::fs;
use std::path::PathBuf;

/// Filesystem storage rooted at `base_path`.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }
}

impl Storage for LocalStorage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = self.base_path.join(path);
        fs::read(&full_path).map_err(|e| EtlError::io(full_path.display().to_string(), e))
    }

    fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = self.base_path.join(path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| EtlError::io(parent.display().to_string(), e))?;
        }

        fs::write(&full_path, data).map_err(|e| EtlError::io(full_path.display().to_string(), e))
    }
}
