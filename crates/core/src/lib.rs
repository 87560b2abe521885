//! Domain-level building blocks shared by the data and HTTP layers.
//!
//! This crate has no I/O and no framework dependencies: field schemas,
//! listing defaults, sort-specification parsing, and the shared id type
//! live here so both the repositories and the API handlers can use them.

pub mod listing;
pub mod schema;
pub mod types;
