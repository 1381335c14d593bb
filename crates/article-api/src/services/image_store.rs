use std::path::PathBuf;

use article_core::AppError;
use tokio::fs;

/// Local filesystem sink for attached image payloads.
///
/// Every payload lands in a flat directory under a caller-chosen file name;
/// names are generated from fresh identifiers so writes never contend on a
/// shared file.
#[derive(Debug, Clone)]
pub struct ImageStore {
    base_path: PathBuf,
}

impl ImageStore {
    /// Create the store, creating the directory if it does not exist.
    pub async fn new(base_path: impl Into<PathBuf>) -> Result<Self, AppError> {
        let base_path = base_path.into();

        fs::create_dir_all(&base_path).await.map_err(|e| {
            AppError::Storage(format!(
                "Failed to create image directory {}: {}",
                base_path.display(),
                e
            ))
        })?;

        Ok(ImageStore { base_path })
    }

    /// Write the payload under `file_name` and return the stored path.
    ///
    /// File names come from generated identifiers, but separators and parent
    /// references are still rejected so a stored path can never escape the
    /// image directory.
    pub async fn save(&self, file_name: &str, data: &[u8]) -> Result<String, AppError> {
        if file_name.is_empty()
            || file_name.contains("..")
            || file_name.contains('/')
            || file_name.contains('\\')
        {
            return Err(AppError::InvalidInput(
                "Image file name contains invalid characters".to_string(),
            ));
        }

        let path = self.base_path.join(file_name);
        fs::write(&path, data).await?;

        Ok(path.to_string_lossy().into_owned())
    }

    /// Remove a previously stored file.
    pub async fn remove(&self, path: &str) -> Result<(), AppError> {
        fs::remove_file(path).await?;
        Ok(())
    }
}
