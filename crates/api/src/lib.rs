//! Filmoteka API server library.
//!
//! Exposes configuration, state, error handling, and the router so the
//! binary entrypoint and the integration tests share the same building
//! blocks.

pub mod coerce;
pub mod config;
pub mod error;
pub mod handlers;
pub mod query;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
