//! Repository for the `actors` table.

use sqlx::PgPool;

use filmoteka_core::types::DbId;

use crate::models::actor::{Actor, CreateActor};
use crate::update::{BindValue, UpdateSet};

/// Column list shared across queries.
const COLUMNS: &str = r#""id", "name", "surname", "patronymic", "year-birth", "gender""#;

/// Provides CRUD operations for actors.
pub struct ActorRepo;

impl ActorRepo {
    /// Find an actor by their internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Actor>, sqlx::Error> {
        let query = format!(r#"SELECT {COLUMNS} FROM "actors" WHERE "id" = $1"#);
        sqlx::query_as::<_, Actor>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new actor.
    pub async fn insert(pool: &PgPool, input: &CreateActor) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"INSERT INTO "actors" ("name", "surname", "patronymic", "year-birth", "gender")
             VALUES ($1, $2, $3, $4, $5)"#,
        )
        .bind(&input.name)
        .bind(&input.surname)
        .bind(&input.patronymic)
        .bind(input.year_birth)
        .bind(input.gender)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Apply a partial update. Returns `false` when the set was empty
    /// and no statement was issued.
    pub async fn update(pool: &PgPool, id: DbId, set: UpdateSet) -> Result<bool, sqlx::Error> {
        let Some((query, values)) = set.into_query("actors") else {
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

    /// Hard delete. The affected-row count is ignored, as with movies.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query(r#"DELETE FROM "actors" WHERE "id" = $1"#)
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }
}
