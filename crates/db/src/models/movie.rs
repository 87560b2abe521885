//! Movie entity model and DTOs.

use serde::Serialize;
use sqlx::FromRow;

use filmoteka_core::types::DbId;

use crate::models::actor::Actor;

/// A full row from the `movies` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Movie {
    pub id: DbId,
    pub name: String,
    pub desc: String,
    pub genre: String,
    #[sqlx(rename = "year-release")]
    #[serde(rename = "year-release")]
    pub year_release: i64,
}

/// List projection of a movie; `desc` stays out of listings.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MovieSummary {
    pub id: DbId,
    pub name: String,
    pub genre: String,
    #[sqlx(rename = "year-release")]
    #[serde(rename = "year-release")]
    pub year_release: i64,
}

/// A movie with its cast resolved through the association table.
#[derive(Debug, Serialize)]
pub struct MovieWithActors {
    #[serde(flatten)]
    pub movie: Movie,
    pub actors: Vec<Actor>,
}

/// Insert payload, built by the handlers once validation has passed.
#[derive(Debug, Clone)]
pub struct CreateMovie {
    pub name: String,
    pub desc: String,
    pub genre: String,
    pub year_release: i64,
}
