// Alias service - owns the alias table on a dedicated thread
//
// The service thread answers queries and applies mutations; a separate
// writer thread persists snapshots so callers never block on disk I/O.

mod handle;
mod writer;

pub use handle::{AliasService, AliasServiceConfig, ServiceError};
