use crate::utils::error::{ClassifyError, Result};
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &Path) -> Result<()> {
    let raw = path.as_os_str();
    if raw.is_empty() {
        return Err(ClassifyError::ValidationError {
            message: format!("{} cannot be empty", field_name),
        });
    }

    if raw.as_encoded_bytes().contains(&0) {
        return Err(ClassifyError::ValidationError {
            message: format!("{} contains null bytes", field_name),
        });
    }

    Ok(())
}
