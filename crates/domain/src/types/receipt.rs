//! Receipt upload descriptor

use std::path::PathBuf;

use crate::errors::{HarvestError, Result};

/// A local file to attach to an expense.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptUpload {
    /// Where to read the file from.
    pub path: PathBuf,
    /// Filename reported to the API in the multipart part.
    pub original_name: String,
}

impl ReceiptUpload {
    pub fn new(path: impl Into<PathBuf>, original_name: impl Into<String>) -> Self {
        Self { path: path.into(), original_name: original_name.into() }
    }

    /// # Errors
    /// Returns `HarvestError::Validation` if the path or the original name is
    /// empty.
    pub fn validate(&self) -> Result<()> {
        if self.path.as_os_str().is_empty() || self.original_name.trim().is_empty() {
            return Err(HarvestError::Validation(
                "receipt upload must have a path and an original name".to_string(),
            ));
        }
        Ok(())
    }
}
