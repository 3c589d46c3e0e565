//! Persistence layer for the alias table.
//!
//! The service talks to storage through the `AliasStoreBackend` trait so
//! tests can substitute an in-memory backend. The production implementation
//! is `JsonFileStore`, which keeps the table as a pretty-printed JSON object
//! on disk and writes it atomically.

mod json;
mod traits;

pub use json::{JsonFileStore, StoreError};
pub use traits::AliasStoreBackend;
