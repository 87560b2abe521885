//! Repository for the `movies-actors` association table.

use sqlx::PgPool;

use filmoteka_core::listing::ACTOR_MOVIES_LIMIT;
use filmoteka_core::types::DbId;

use crate::models::movie_actor::MovieActorRow;

/// Column list shared across queries.
const COLUMNS: &str = r#""movie-id", "actor-id""#;

/// Provides operations on the movie/actor association.
pub struct MovieActorRepo;

impl MovieActorRepo {
    /// Insert an association pair. Uniqueness and referential integrity
    /// are the store's call; a rejected pair surfaces as a database
    /// error the caller folds into its response envelope.
    pub async fn attach(pool: &PgPool, movie_id: DbId, actor_id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query(r#"INSERT INTO "movies-actors" ("movie-id", "actor-id") VALUES ($1, $2)"#)
            .bind(movie_id)
            .bind(actor_id)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// All association rows for a movie.
    pub async fn list_for_movie(
        pool: &PgPool,
        movie_id: DbId,
    ) -> Result<Vec<MovieActorRow>, sqlx::Error> {
        let query = format!(r#"SELECT {COLUMNS} FROM "movies-actors" WHERE "movie-id" = $1"#);
        sqlx::query_as::<_, MovieActorRow>(&query)
            .bind(movie_id)
            .fetch_all(pool)
            .await
    }

    /// Association rows for an actor, capped at [`ACTOR_MOVIES_LIMIT`].
    pub async fn list_for_actor(
        pool: &PgPool,
        actor_id: DbId,
    ) -> Result<Vec<MovieActorRow>, sqlx::Error> {
        let query =
            format!(r#"SELECT {COLUMNS} FROM "movies-actors" WHERE "actor-id" = $1 LIMIT $2"#);
        sqlx::query_as::<_, MovieActorRow>(&query)
            .bind(actor_id)
            .bind(ACTOR_MOVIES_LIMIT)
            .fetch_all(pool)
            .await
    }
}
