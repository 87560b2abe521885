//! Handlers for the `/actors` resource.
//!
//! Actors have no list or single-get endpoint of their own; reads go
//! through a movie's cast or through `GET /actors/{id}/movies`.

use axum::extract::{Path, State};
use axum::Json;
use serde_json::Value;

use filmoteka_core::schema::{FieldSpec, Schema};
use filmoteka_db::models::actor::CreateActor;
use filmoteka_db::models::movie::Movie;
use filmoteka_db::repositories::actor_repo::ActorRepo;
use filmoteka_db::repositories::movie_actor_repo::MovieActorRepo;
use filmoteka_db::repositories::movie_repo::MovieRepo;

use crate::coerce;
use crate::error::{AppError, AppResult};
use crate::handlers::{parse_id, record_int, record_str, update_set_from};
use crate::response::ErrorsResponse;
use crate::state::AppState;

static CREATE_SCHEMA: Schema = Schema::new(&[
    FieldSpec::string("name", "name"),
    FieldSpec::string("surname", "surname"),
    FieldSpec::string("patronymic", "patronymic"),
    FieldSpec::integer("year-birth", "year birth"),
    FieldSpec::integer("gender", "gender"),
]);

static UPDATE_SCHEMA: Schema = Schema::new(&[
    FieldSpec::nullable_string("name", "name"),
    FieldSpec::nullable_string("surname", "surname"),
    FieldSpec::nullable_string("patronymic", "patronymic"),
    FieldSpec::nullable_integer("year-birth", "year birth"),
    FieldSpec::nullable_integer("gender", "gender"),
]);

/// POST /actors
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> AppResult<Json<ErrorsResponse>> {
    let record = coerce::create_record(&body, &CREATE_SCHEMA);
    if let Err(errors) = CREATE_SCHEMA.validate(&record) {
        return Ok(Json(ErrorsResponse::failed(errors)));
    }
    if let Err(message) = CREATE_SCHEMA.check_required_present(&record) {
        return Ok(Json(ErrorsResponse::single(message)));
    }

    let input = CreateActor {
        name: record_str(&record, "name"),
        surname: record_str(&record, "surname"),
        patronymic: record_str(&record, "patronymic"),
        year_birth: record_int(&record, "year-birth"),
        gender: record_int(&record, "gender"),
    };
    ActorRepo::insert(&state.pool, &input).await?;
    tracing::debug!(name = %input.name, surname = %input.surname, "Actor created");

    Ok(Json(ErrorsResponse::ok()))
}

/// PUT /actors/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> AppResult<Json<ErrorsResponse>> {
    let id = parse_id(&id).ok_or(AppError::NotFound)?;

    let record = coerce::update_record(&body, &UPDATE_SCHEMA);
    if let Err(errors) = UPDATE_SCHEMA.validate(&record) {
        return Ok(Json(ErrorsResponse::failed(errors)));
    }

    let set = update_set_from(&UPDATE_SCHEMA, &record);
    if set.is_empty() {
        return Ok(Json(ErrorsResponse::ok()));
    }

    ActorRepo::update(&state.pool, id, set).await?;
    Ok(Json(ErrorsResponse::ok()))
}

/// DELETE /actors/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<String> {
    let Some(id) = parse_id(&id) else {
        return Ok("0".to_string());
    };
    ActorRepo::delete(&state.pool, id).await?;
    tracing::debug!(actor_id = id, "Actor deleted");
    Ok("1".to_string())
}

/// GET /actors/{id}/movies
///
/// Full movie rows for the actor's first ten associations. An
/// unparsable id answers an empty list, never a 404.
pub async fn movies_of(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Vec<Movie>>> {
    let Some(id) = parse_id(&id) else {
        return Ok(Json(Vec::new()));
    };

    let mut movies = Vec::new();
    for row in MovieActorRepo::list_for_actor(&state.pool, id).await? {
        // Dangling association rows are skipped, not surfaced.
        if let Some(movie) = MovieRepo::find_by_id(&state.pool, row.movie_id).await? {
            movies.push(movie);
        }
    }

    Ok(Json(movies))
}
