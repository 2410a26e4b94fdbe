use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use quiz_core::model::QuestionBank;
use tracing::{debug, info};

use crate::repository::{QuestionRecord, QuestionRepository, StorageError, bank_from_records};

mod mapping;

/// Question bank stored as a JSON array on disk.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn display_path(&self) -> String {
        self.path.display().to_string()
    }

    /// Write `records` to the file, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Conflict` if the file exists and `overwrite` is false,
    /// `StorageError::Io` if writing fails.
    pub async fn write_records(
        &self,
        records: &[QuestionRecord],
        overwrite: bool,
    ) -> Result<(), StorageError> {
        let exists = tokio::fs::try_exists(&self.path)
            .await
            .map_err(|e| StorageError::Io(e.to_string()))?;
        if exists && !overwrite {
            return Err(StorageError::Conflict(self.display_path()));
        }

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| StorageError::Io(e.to_string()))?;
        }

        let body = mapping::render_records(records)?;
        tokio::fs::write(&self.path, body)
            .await
            .map_err(|e| StorageError::Io(e.to_string()))?;
        debug!(path = %self.path.display(), count = records.len(), "wrote question bank");
        Ok(())
    }

    async fn read_records(&self) -> Result<Vec<QuestionRecord>, StorageError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(StorageError::NotFound(self.display_path()));
            }
            Err(e) => return Err(StorageError::Io(e.to_string())),
        };
        mapping::parse_records(&raw)
    }
}

#[async_trait]
impl QuestionRepository for JsonFileRepository {
    async fn load_bank(&self) -> Result<QuestionBank, StorageError> {
        let records = self.read_records().await?;
        let bank = bank_from_records(records)?;
        info!(path = %self.path.display(), questions = bank.len(), "loaded question bank");
        Ok(bank)
    }
}
