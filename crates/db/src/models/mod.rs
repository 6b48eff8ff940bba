//! Domain model structs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `New*` payload struct used for inserts and full-row replacement
//! - The whitelist mapping wire-level sort fields to sortable columns

pub mod article;
pub mod source;
pub mod user;
