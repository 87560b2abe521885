//! Movie-to-actor association rows.

use sqlx::FromRow;

use filmoteka_core::types::DbId;

/// A row from the `movies-actors` table. Pairs are never serialized to
/// clients directly; handlers resolve them into full entities.
#[derive(Debug, Clone, FromRow)]
pub struct MovieActorRow {
    #[sqlx(rename = "movie-id")]
    pub movie_id: DbId,
    #[sqlx(rename = "actor-id")]
    pub actor_id: DbId,
}
