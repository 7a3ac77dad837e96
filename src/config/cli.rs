use crate::core::Storage;
use crate::utils::error::{ClassifyError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

#[derive(Debug, Clone, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }
}

impl Storage for LocalStorage {
    fn read_file(&self, path: &Path) -> Result<Vec<u8>> {
        fs::read(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ClassifyError::InputNotFound {
                path: path.to_path_buf(),
            },
            _ => ClassifyError::IoError(e),
        })
    }
}
