// Config file locations for the persisted alias table

use std::path::PathBuf;

/// Directory under the per-user config root that holds this crate's files
const APP_DIR_NAME: &str = "cmdalias";

/// File name of the persisted alias table
const ALIASES_FILE_NAME: &str = "aliases.json";

/// Error types for path resolution
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    /// The per-user config directory could not be determined
    #[error("Could not determine the user config directory")]
    ConfigDirUnavailable,
}

/// Purpose tags a path provider can resolve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathPurpose {
    /// The persisted alias table
    Aliases,
}

/// Capability that resolves a file path for a given purpose
///
/// Front ends inject an implementation to relocate persisted files, for
/// example under a profile-specific directory.
pub trait PathProvider: Send + Sync {
    /// Resolve the path to use for `purpose`
    fn resolve(&self, purpose: PathPurpose) -> Result<PathBuf, PathError>;
}

/// Get the default location of the persisted alias table
/// Returns {user-config-dir}/cmdalias/aliases.json
pub fn default_aliases_path() -> Result<PathBuf, PathError> {
    let config_dir = dirs::config_dir().ok_or(PathError::ConfigDirUnavailable)?;
    Ok(config_dir.join(APP_DIR_NAME).join(ALIASES_FILE_NAME))
}

#[cfg(test)]
#[path = "paths_test.rs"]
mod tests;
