// Validation rules for candidate aliases, applied before any table mutation

use super::table::AliasError;

/// Built-in command names that can never be shadowed by an alias
pub const RESERVED_COMMANDS: &[&str] = &["alias", "aliases", "config", "exit", "help", "quit"];

/// Validate a candidate alias name and command list
///
/// Checks run in a fixed order and stop at the first failure, so an input
/// that violates several rules always reports the name problem before the
/// commands problem. Command lists are `Vec<String>`, so element typing
/// needs no runtime check.
pub fn validate(name: &str, commands: &[String]) -> Result<(), AliasError> {
    if name.is_empty() {
        return Err(AliasError::EmptyName);
    }
    if name.contains(' ') {
        return Err(AliasError::NameContainsSpaces);
    }
    if RESERVED_COMMANDS.contains(&name) {
        return Err(AliasError::ReservedName(name.to_string()));
    }
    if commands.is_empty() {
        return Err(AliasError::EmptyCommands);
    }
    Ok(())
}

#[cfg(test)]
#[path = "validate_test.rs"]
mod tests;
