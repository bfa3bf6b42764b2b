//! JSON file feedback store.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use tracing::debug;

use feedback_core::error::{AppError, ErrorKind};
use feedback_core::result::AppResult;
use feedback_entity::FeedbackRecord;

use crate::store::FeedbackStore;

/// Stores every record in one pretty-printed JSON array.
///
/// Appends are read-modify-write cycles serialized by `write_lock`, and each
/// rewrite lands in a sibling temp file that is renamed over the data file.
/// The lock only covers this process: two processes sharing a file can
/// still lose each other's appends.
#[derive(Debug)]
pub struct JsonFileStore {
    /// The JSON array file.
    path: PathBuf,
    /// Scratch file the next array is written to before the rename.
    temp_path: PathBuf,
    /// Serializes file creation and appends.
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    /// Create a store backed by the file at `path`. Nothing is touched on disk.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let mut temp_name = path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        temp_name.push(".tmp");
        let temp_path = path.with_file_name(temp_name);

        Self {
            path,
            temp_path,
            write_lock: Mutex::new(()),
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The directory holding the data file, if the path names one.
    fn parent_dir(&self) -> Option<&Path> {
        self.path.parent().filter(|p| !p.as_os_str().is_empty())
    }

    async fn read_records(&self) -> AppResult<Vec<FeedbackRecord>> {
        let raw = fs::read_to_string(&self.path).await.map_err(|e| {
            let message = if e.kind() == std::io::ErrorKind::NotFound {
                format!("Feedback file not found: {}", self.path.display())
            } else {
                format!("Failed to read feedback file: {}", self.path.display())
            };
            AppError::with_source(ErrorKind::Storage, message, e)
        })?;

        serde_json::from_str(&raw).map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Malformed feedback file: {}", self.path.display()),
                e,
            )
        })
    }

    async fn write_records(&self, records: &[FeedbackRecord]) -> AppResult<()> {
        let data = serde_json::to_vec_pretty(records)?;

        let mut file = fs::File::create(&self.temp_path).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to create temp file: {}", self.temp_path.display()),
                e,
            )
        })?;
        file.write_all(&data).await.map_err(|e| {
            AppError::with_source(ErrorKind::Storage, "Failed to write feedback data", e)
        })?;
        file.sync_all().await.map_err(|e| {
            AppError::with_source(ErrorKind::Storage, "Failed to flush feedback data", e)
        })?;
        drop(file);

        fs::rename(&self.temp_path, &self.path).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to replace feedback file: {}", self.path.display()),
                e,
            )
        })?;

        debug!(
            path = %self.path.display(),
            records = records.len(),
            bytes = data.len(),
            "Wrote feedback file"
        );
        Ok(())
    }
}

#[async_trait]
impl FeedbackStore for JsonFileStore {
    async fn ensure_exists(&self) -> AppResult<()> {
        if let Some(dir) = self.parent_dir() {
            fs::create_dir_all(dir).await.map_err(|e| {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to create data directory: {}", dir.display()),
                    e,
                )
            })?;
        }

        // The file only ever appears at `path` complete, via the rename in
        // write_records, so readers never see it half-initialized.
        let _guard = self.write_lock.lock().await;

        let exists = fs::try_exists(&self.path).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to inspect feedback file: {}", self.path.display()),
                e,
            )
        })?;
        if exists {
            return Ok(());
        }

        self.write_records(&[]).await?;
        debug!(path = %self.path.display(), "Created empty feedback file");
        Ok(())
    }

    async fn append(&self, record: &FeedbackRecord) -> AppResult<()> {
        let _guard = self.write_lock.lock().await;

        let mut records = self.read_records().await?;
        records.push(record.clone());
        self.write_records(&records).await
    }

    async fn read_all(&self) -> AppResult<Vec<FeedbackRecord>> {
        self.read_records().await
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(self.parent_dir().is_none_or(Path::is_dir))
    }
}
