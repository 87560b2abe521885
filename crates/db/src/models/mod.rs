//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - An insert DTO built by the handlers after validation has passed
//!
//! Several store columns are hyphenated (`year-release`, `movie-id`),
//! so both sqlx and serde renames appear throughout.

pub mod actor;
pub mod movie;
pub mod movie_actor;
