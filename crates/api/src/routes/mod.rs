pub mod actor;
pub mod health;
pub mod movie;

use axum::Router;

use crate::state::AppState;

/// Build the entity route tree.
///
/// Route hierarchy:
///
/// ```text
/// /movies                       list, create
/// /movies/count                 total as plain text
/// /movies/{id}                  get (with cast), update, delete
/// /movies/{id}/attach-actor     associate an actor
///
/// /actors                       create
/// /actors/{id}                  update, delete
/// /actors/{id}/movies           movies featuring the actor
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/movies", movie::router())
        .nest("/actors", actor::router())
}
