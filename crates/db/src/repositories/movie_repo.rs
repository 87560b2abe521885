//! Repository for the `movies` table.

use sqlx::PgPool;

use filmoteka_core::types::DbId;

use crate::models::movie::{CreateMovie, Movie, MovieSummary};
use crate::update::{BindValue, UpdateSet};

/// Column list shared across full-row queries.
const COLUMNS: &str = r#""id", "name", "desc", "genre", "year-release""#;

/// Columns returned by list queries; `desc` stays out of summaries.
const SUMMARY_COLUMNS: &str = r#""id", "name", "genre", "year-release""#;

/// Provides CRUD operations for movies.
pub struct MovieRepo;

impl MovieRepo {
    /// List movie summaries. `order` must be a fragment produced by
    /// `parse_sort`, never raw caller input.
    pub async fn list(
        pool: &PgPool,
        offset: i64,
        limit: i64,
        order: Option<&str>,
    ) -> Result<Vec<MovieSummary>, sqlx::Error> {
        let mut query = format!(r#"SELECT {SUMMARY_COLUMNS} FROM "movies""#);
        if let Some(order) = order {
            query.push(' ');
            query.push_str(order);
        }
        query.push_str(" LIMIT $1 OFFSET $2");

        sqlx::query_as::<_, MovieSummary>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Total number of movies.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(r#"SELECT COUNT(*) FROM "movies""#)
            .fetch_one(pool)
            .await
    }

    /// Find a movie by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!(r#"SELECT {COLUMNS} FROM "movies" WHERE "id" = $1"#);
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new movie.
    pub async fn insert(pool: &PgPool, input: &CreateMovie) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"INSERT INTO "movies" ("name", "desc", "genre", "year-release")
             VALUES ($1, $2, $3, $4)"#,
        )
        .bind(&input.name)
        .bind(&input.desc)
        .bind(&input.genre)
        .bind(input.year_release)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Apply a partial update. Returns `false` when the set was empty
    /// and no statement was issued.
    pub async fn update(pool: &PgPool, id: DbId, set: UpdateSet) -> Result<bool, sqlx::Error> {
        let Some((query, values)) = set.into_query("movies") else {
            return Ok(false);
        };

        let mut q = sqlx::query(&query).bind(id);
        for value in values {
            q = match value {
                BindValue::Text(text) => q.bind(text),
                BindValue::BigInt(n) => q.bind(n),
            };
        }
        q.execute(pool).await?;
        Ok(true)
    }

    /// Hard delete. The affected-row count is ignored: deleting an id
    /// that never existed still reports success at the API boundary.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query(r#"DELETE FROM "movies" WHERE "id" = $1"#)
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }
}
