// Alias table - maps alias names to ordered lists of command strings

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::validate::validate;

/// Which input field a validation error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationField {
    Name,
    Commands,
}

impl std::fmt::Display for ValidationField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationField::Name => write!(f, "name"),
            ValidationField::Commands => write!(f, "commands"),
        }
    }
}

/// Error types for alias operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AliasError {
    /// Alias name is empty
    #[error("Alias name cannot be empty")]
    EmptyName,
    /// Alias name contains an embedded space
    #[error("Alias name cannot contain spaces")]
    NameContainsSpaces,
    /// Alias name collides with a built-in command
    #[error("Cannot override built-in command '{0}'")]
    ReservedName(String),
    /// Command list is empty
    #[error("Alias commands cannot be empty")]
    EmptyCommands,
    /// No alias with this name
    #[error("Alias '{0}' not found")]
    NotFound(String),
}

impl AliasError {
    /// The input field a validation variant refers to, `None` for `NotFound`
    pub fn field(&self) -> Option<ValidationField> {
        match self {
            AliasError::EmptyName | AliasError::NameContainsSpaces | AliasError::ReservedName(_) => {
                Some(ValidationField::Name)
            }
            AliasError::EmptyCommands => Some(ValidationField::Commands),
            AliasError::NotFound(_) => None,
        }
    }
}

/// Table of aliases, keyed by name
///
/// Serializes as a JSON object whose keys are alias names and whose values
/// are arrays of command strings, which is also the persisted file format.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct AliasTable {
    aliases: HashMap<String, Vec<String>>,
}

impl AliasTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite an alias after validating it
    ///
    /// On a validation failure the table is left untouched.
    #[must_use = "this returns a Result that should be handled"]
    pub fn define(&mut self, name: &str, commands: Vec<String>) -> Result<(), AliasError> {
        validate(name, &commands)?;
        self.aliases.insert(name.to_string(), commands);
        Ok(())
    }

    /// Remove an alias by name
    #[must_use = "this returns a Result that should be handled"]
    pub fn remove(&mut self, name: &str) -> Result<(), AliasError> {
        if self.aliases.remove(name).is_none() {
            return Err(AliasError::NotFound(name.to_string()));
        }
        Ok(())
    }

    /// Get the command list for an alias
    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.aliases.get(name).map(Vec::as_slice)
    }

    /// Check whether a name is defined as an alias
    pub fn is_alias(&self, name: &str) -> bool {
        self.aliases.contains_key(name)
    }

    /// List all entries in arbitrary map order
    ///
    /// Callers that display the table sort by name themselves; the service
    /// layer does this for its listing view.
    pub fn list(&self) -> Vec<(&str, &[String])> {
        self.aliases
            .iter()
            .map(|(name, commands)| (name.as_str(), commands.as_slice()))
            .collect()
    }

    /// Get the number of aliases
    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    /// Check if the table is empty
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}

#[cfg(test)]
#[path = "table_test.rs"]
mod tests;
