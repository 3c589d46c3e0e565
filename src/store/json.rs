// JSON file store - persists the alias table as a pretty-printed JSON object
// keyed by alias name, with atomic temp file + rename writes

use async_trait::async_trait;
use std::path::PathBuf;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::alias::AliasTable;

use super::traits::AliasStoreBackend;

/// Error types for persistence failures
///
/// Only the save path reports errors; a load failure falls back to an
/// empty table instead of surfacing.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StoreError {
    /// Failed to serialize the table to JSON
    #[error("Failed to serialize aliases: {0}")]
    Serialize(String),
    /// Failed to create the config directory
    #[error("Failed to create config directory: {0}")]
    DirectoryCreation(String),
    /// Failed to write the temp file
    #[error("Failed to write aliases file: {0}")]
    Write(String),
    /// Failed to sync the temp file to disk
    #[error("Failed to sync aliases file: {0}")]
    Sync(String),
    /// Failed to move the temp file into place
    #[error("Failed to rename aliases file: {0}")]
    Rename(String),
}

/// File-based store for the alias table
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    /// Path to the persistence file
    config_path: PathBuf,
}

impl JsonFileStore {
    /// Create a store that persists to the given file path
    pub fn new(config_path: PathBuf) -> Self {
        Self { config_path }
    }
}

#[async_trait]
impl AliasStoreBackend for JsonFileStore {
    async fn load(&self) -> AliasTable {
        crate::debug!("Loading aliases from {:?}", self.config_path);

        if !self.config_path.exists() {
            crate::debug!("No aliases file found, starting with an empty table");
            return AliasTable::new();
        }

        let content = match fs::read_to_string(&self.config_path).await {
            Ok(content) => content,
            Err(e) => {
                crate::warn!("Failed to read aliases file: {}, starting with an empty table", e);
                return AliasTable::new();
            }
        };

        match serde_json::from_str::<AliasTable>(&content) {
            Ok(table) => {
                crate::info!("Loaded {} aliases from {:?}", table.len(), self.config_path);
                table
            }
            Err(e) => {
                crate::warn!("Failed to parse aliases file: {}, starting with an empty table", e);
                AliasTable::new()
            }
        }
    }

    async fn save(&self, table: &AliasTable) -> Result<(), StoreError> {
        crate::debug!("Persisting {} aliases to {:?}", table.len(), self.config_path);

        // Ensure parent directory exists
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| StoreError::DirectoryCreation(e.to_string()))?;
        }

        let content = serde_json::to_string_pretty(table)
            .map_err(|e| StoreError::Serialize(e.to_string()))?;

        // Use atomic temp file + rename pattern
        let temp_path = self.config_path.with_extension("tmp");

        // Write to temp file with explicit sync
        {
            let mut file = fs::File::create(&temp_path)
                .await
                .map_err(|e| StoreError::Write(e.to_string()))?;
            file.write_all(content.as_bytes())
                .await
                .map_err(|e| StoreError::Write(e.to_string()))?;
            file.sync_all()
                .await
                .map_err(|e| StoreError::Sync(e.to_string()))?;
        } // File closed here

        // Atomic rename
        if let Err(e) = fs::rename(&temp_path, &self.config_path).await {
            // Clean up temp file on error
            let _ = fs::remove_file(&temp_path).await;
            return Err(StoreError::Rename(e.to_string()));
        }

        crate::debug!("Aliases persisted successfully");
        Ok(())
    }
}

#[cfg(test)]
#[path = "json_test.rs"]
mod tests;
