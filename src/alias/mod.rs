// Alias module - the alias table, its validation rules, and nested expansion

mod expand;
mod table;
mod validate;

pub use expand::expand;
pub use table::{AliasError, AliasTable, ValidationField};
pub use validate::{validate, RESERVED_COMMANDS};
