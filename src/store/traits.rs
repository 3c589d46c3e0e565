//! Storage backend trait for the alias table.
//!
//! This trait defines the interface for persistence backends, allowing
//! the service layer to be decoupled from the specific storage implementation.

use crate::alias::AliasTable;
use async_trait::async_trait;

use super::json::StoreError;

/// Backend trait for alias table persistence.
///
/// Implementations of this trait provide the actual load and save
/// operations. The primary implementation is JsonFileStore.
#[async_trait]
pub trait AliasStoreBackend: Send + Sync {
    /// Load the persisted alias table.
    ///
    /// A missing or unreadable file is not an error: implementations fall
    /// back to an empty table so a fresh install starts cleanly.
    async fn load(&self) -> AliasTable;

    /// Persist the alias table, replacing whatever was stored before.
    async fn save(&self, table: &AliasTable) -> Result<(), StoreError>;
}

#[cfg(test)]
#[path = "traits_test.rs"]
mod tests;
