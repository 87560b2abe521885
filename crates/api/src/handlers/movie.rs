//! Handlers for the `/movies` resource.
//!
//! Mutating endpoints answer 200 with the `{ "errors": ... }` envelope;
//! HTTP statuses are reserved for the read paths' not-found contract
//! and for genuine failures.

use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::Value;

use filmoteka_core::listing::{parse_sort, MAX_LIST_LIMIT, MIN_LIST_LIMIT};
use filmoteka_core::schema::{FieldSpec, Schema};
use filmoteka_db::models::movie::{CreateMovie, MovieWithActors};
use filmoteka_db::repositories::actor_repo::ActorRepo;
use filmoteka_db::repositories::movie_actor_repo::MovieActorRepo;
use filmoteka_db::repositories::movie_repo::MovieRepo;

use crate::coerce;
use crate::error::{AppError, AppResult};
use crate::handlers::{parse_id, record_int, record_str, update_set_from};
use crate::query::ListParams;
use crate::response::ErrorsResponse;
use crate::state::AppState;

/// Declared field order drives validation messages, presence checks,
/// and update SET clauses alike.
static CREATE_SCHEMA: Schema = Schema::new(&[
    FieldSpec::string("name", "name"),
    FieldSpec::string("desc", "description"),
    FieldSpec::string("genre", "genre"),
    FieldSpec::integer("year-release", "year release"),
]);

static UPDATE_SCHEMA: Schema = Schema::new(&[
    FieldSpec::nullable_string("name", "name"),
    FieldSpec::nullable_string("desc", "description"),
    FieldSpec::nullable_string("genre", "genre"),
    FieldSpec::nullable_integer("year-release", "year release"),
]);

static LIST_SCHEMA: Schema = Schema::new(&[
    FieldSpec::optional_integer("offset", "offset"),
    FieldSpec::optional_integer("limit", "limit").bounded(MIN_LIST_LIMIT, MAX_LIST_LIMIT),
    FieldSpec::optional_integer("page", "page"),
    FieldSpec::nullable_string("filter", "filter"),
]);

static ATTACH_SCHEMA: Schema = Schema::new(&[FieldSpec::integer("id", "id")]);

/// Columns listings may sort by.
const SORT_COLUMNS: &[&str] = &["name", "genre", "year-release"];

/// GET /movies
///
/// Summary rows only; `desc` is not part of listings.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Response> {
    let record = params.into_record();
    if let Err(errors) = LIST_SCHEMA.validate(&record) {
        return Ok(Json(ErrorsResponse::failed(errors)).into_response());
    }

    let offset = record_int(&record, "offset");
    let limit = record_int(&record, "limit");
    let order = parse_sort(record["filter"].as_str(), SORT_COLUMNS);

    let movies = MovieRepo::list(&state.pool, offset, limit, order.as_deref()).await?;
    Ok(Json(movies).into_response())
}

/// GET /movies/count
///
/// The total as a plain-text integer.
pub async fn count(State(state): State<AppState>) -> AppResult<String> {
    let count = MovieRepo::count(&state.pool).await?;
    Ok(count.to_string())
}

/// GET /movies/{id}
///
/// The full row plus its cast. Unparsable and missing ids are the same
/// bare 404.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MovieWithActors>> {
    let id = parse_id(&id).ok_or(AppError::NotFound)?;
    let movie = MovieRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::NotFound)?;

    let mut actors = Vec::new();
    for row in MovieActorRepo::list_for_movie(&state.pool, id).await? {
        // Dangling association rows are skipped, not surfaced.
        if let Some(actor) = ActorRepo::find_by_id(&state.pool, row.actor_id).await? {
            actors.push(actor);
        }
    }

    Ok(Json(MovieWithActors { movie, actors }))
}

/// POST /movies
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

    let input = CreateMovie {
        name: record_str(&record, "name"),
        desc: record_str(&record, "desc"),
        genre: record_str(&record, "genre"),
        year_release: record_int(&record, "year-release"),
    };
    MovieRepo::insert(&state.pool, &input).await?;
    tracing::debug!(name = %input.name, "Movie created");

    Ok(Json(ErrorsResponse::ok()))
}

/// PUT /movies/{id}
///
/// Truthy fields only; an all-falsy payload is a successful no-op.
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

    MovieRepo::update(&state.pool, id, set).await?;
    Ok(Json(ErrorsResponse::ok()))
}

/// DELETE /movies/{id}
///
/// Answers `"1"` even when the id matched nothing; `"0"` is reserved
/// for ids that do not parse at all.
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<String> {
    let Some(id) = parse_id(&id) else {
        return Ok("0".to_string());
    };
    MovieRepo::delete(&state.pool, id).await?;
    tracing::debug!(movie_id = id, "Movie deleted");
    Ok("1".to_string())
}

/// POST /movies/{id}/attach-actor
///
/// Callers depend on an unparsable movie id answering plain success.
pub async fn attach_actor(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> AppResult<Json<ErrorsResponse>> {
    let Some(movie_id) = parse_id(&id) else {
        return Ok(Json(ErrorsResponse::ok()));
    };

    let record = coerce::create_record(&body, &ATTACH_SCHEMA);
    if let Err(errors) = ATTACH_SCHEMA.validate(&record) {
        return Ok(Json(ErrorsResponse::failed(errors)));
    }

    let actor_id = record_int(&record, "id");
    if let Err(err) = MovieActorRepo::attach(&state.pool, movie_id, actor_id).await {
        // Constraint rejections come back as data, carrying the store's
        // own message.
        let message = match err {
            sqlx::Error::Database(db_err) => db_err.message().to_string(),
            other => other.to_string(),
        };
        tracing::debug!(movie_id, actor_id, error = %message, "Attach rejected");
        return Ok(Json(ErrorsResponse::single(message)));
    }

    Ok(Json(ErrorsResponse::ok()))
}
