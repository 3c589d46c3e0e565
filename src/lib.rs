//! Named command aliases with nested expansion and JSON-backed persistence.
//!
//! An alias maps a short name to an ordered list of command strings. Aliases
//! can reference other aliases and forward arguments; expansion flattens them
//! into concrete commands while leaving cyclic references in place verbatim.
//! The table is owned by a dedicated service thread and persisted as a JSON
//! object in the user's config directory.
//!
//! ## Usage
//!
//! ```ignore
//! use cmdalias::{AliasService, AliasServiceConfig};
//!
//! let service = AliasService::start(AliasServiceConfig::new())?;
//! service.define("gs", vec!["git status".to_string()])?;
//! assert_eq!(service.expand("gs")?, vec!["git status".to_string()]);
//! ```

mod alias;
mod paths;
mod service;
mod store;
mod util;

// Re-export log macros for use throughout the crate
pub use log::{debug, error, info, trace, warn};

pub use alias::{expand, AliasError, AliasTable, ValidationField, RESERVED_COMMANDS};
pub use paths::{default_aliases_path, PathError, PathProvider, PathPurpose};
pub use service::{AliasService, AliasServiceConfig, ServiceError};
pub use store::{AliasStoreBackend, JsonFileStore, StoreError};
