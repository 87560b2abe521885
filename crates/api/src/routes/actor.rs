//! Route definitions for the `/actors` resource.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::actor;
use crate::state::AppState;

/// Routes mounted at `/actors`.
///
/// ```text
/// POST   /                -> create
/// PUT    /{id}            -> update
/// DELETE /{id}            -> delete
/// GET    /{id}/movies     -> movies_of
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(actor::create))
        .route("/{id}", put(actor::update).delete(actor::delete))
        .route("/{id}/movies", get(actor::movies_of))
}
