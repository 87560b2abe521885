//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Identifiers are always
//! double-quoted in SQL because several columns carry hyphens.

pub mod actor_repo;
pub mod movie_actor_repo;
pub mod movie_repo;
