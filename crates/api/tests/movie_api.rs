//! HTTP-level integration tests for the `/movies` endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener. Covered here is everything that
//! resolves before the first store round trip: schema validation,
//! presence checks, numeric coercion, and the identifier contracts.

mod common;

use axum::http::StatusCode;
use common::{body_json, body_text, delete, get, post_json, put_json};

// ---------------------------------------------------------------------------
// POST /movies -- schema validation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_create_missing_name_reports_required_property() {
    let app = common::build_test_app();
    let response = post_json(
        app,
        "/movies",
        serde_json::json!({"desc": "Space horror", "genre": "sci-fi", "year-release": 1979}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(
        json,
        serde_json::json!({"errors": ["must have required property 'name'"]})
    );
}

#[tokio::test]
async fn test_create_empty_body_lists_every_violation_in_field_order() {
    let app = common::build_test_app();
    let response = post_json(app, "/movies", serde_json::json!({})).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    // Missing strings stay missing; the year coerces to null and fails
    // as a type violation rather than a missing property.
    assert_eq!(
        json,
        serde_json::json!({"errors": [
            "must have required property 'name'",
            "must have required property 'desc'",
            "must have required property 'genre'",
            "must be integer",
        ]})
    );
}

#[tokio::test]
async fn test_create_non_string_name_must_be_string() {
    let app = common::build_test_app();
    let response = post_json(
        app,
        "/movies",
        serde_json::json!({"name": 5, "desc": "x", "genre": "y", "year-release": 1979}),
    )
    .await;

    let json = body_json(response).await;
    assert_eq!(json, serde_json::json!({"errors": ["must be string"]}));
}

#[tokio::test]
async fn test_create_fractional_year_must_be_integer() {
    let app = common::build_test_app();
    let response = post_json(
        app,
        "/movies",
        serde_json::json!({"name": "Alien", "desc": "x", "genre": "y", "year-release": 1979.5}),
    )
    .await;

    let json = body_json(response).await;
    assert_eq!(json, serde_json::json!({"errors": ["must be integer"]}));
}

// ---------------------------------------------------------------------------
// POST /movies -- presence checks
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_create_empty_name_says_enter_name() {
    let app = common::build_test_app();
    let response = post_json(
        app,
        "/movies",
        serde_json::json!({"name": "", "desc": "x", "genre": "y", "year-release": 1979}),
    )
    .await;

    let json = body_json(response).await;
    assert_eq!(json, serde_json::json!({"errors": ["Enter name"]}));
}

#[tokio::test]
async fn test_create_empty_desc_uses_description_label() {
    let app = common::build_test_app();
    let response = post_json(
        app,
        "/movies",
        serde_json::json!({"name": "Alien", "desc": "", "genre": "y", "year-release": 1979}),
    )
    .await;

    let json = body_json(response).await;
    assert_eq!(json, serde_json::json!({"errors": ["Enter description"]}));
}

#[tokio::test]
async fn test_create_empty_string_year_coerces_to_zero_and_fails_presence() {
    let app = common::build_test_app();
    let response = post_json(
        app,
        "/movies",
        serde_json::json!({"name": "Alien", "desc": "x", "genre": "y", "year-release": ""}),
    )
    .await;

    let json = body_json(response).await;
    assert_eq!(json, serde_json::json!({"errors": ["Enter year release"]}));
}

#[tokio::test]
async fn test_create_presence_reports_first_offender_only() {
    let app = common::build_test_app();
    let response = post_json(
        app,
        "/movies",
        serde_json::json!({"name": "", "desc": "", "genre": "", "year-release": 0}),
    )
    .await;

    let json = body_json(response).await;
    assert_eq!(json, serde_json::json!({"errors": ["Enter name"]}));
}

// ---------------------------------------------------------------------------
// GET /movies -- listing parameter validation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_list_limit_below_minimum() {
    let app = common::build_test_app();
    let response = get(app, "/movies?limit=0").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json, serde_json::json!({"errors": ["must be >= 1"]}));
}

#[tokio::test]
async fn test_list_limit_above_maximum() {
    let app = common::build_test_app();
    let response = get(app, "/movies?limit=100").await;

    let json = body_json(response).await;
    assert_eq!(json, serde_json::json!({"errors": ["must be <= 50"]}));
}

#[tokio::test]
async fn test_list_unparsable_limit_must_be_integer() {
    let app = common::build_test_app();
    let response = get(app, "/movies?limit=abc").await;

    let json = body_json(response).await;
    assert_eq!(json, serde_json::json!({"errors": ["must be integer"]}));
}

#[tokio::test]
async fn test_list_unparsable_page_and_offset_each_report() {
    let app = common::build_test_app();
    let response = get(app, "/movies?offset=abc&page=xyz").await;

    let json = body_json(response).await;
    assert_eq!(
        json,
        serde_json::json!({"errors": ["must be integer", "must be integer"]})
    );
}

#[tokio::test]
async fn test_list_unparsable_page_poisons_the_offset_it_overrides() {
    let app = common::build_test_app();
    let response = get(app, "/movies?offset=5&page=xyz").await;

    let json = body_json(response).await;
    assert_eq!(
        json,
        serde_json::json!({"errors": ["must be integer", "must be integer"]})
    );
}

// ---------------------------------------------------------------------------
// GET /movies/{id}
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_get_unparsable_id_is_bare_404() {
    let app = common::build_test_app();
    let response = get(app, "/movies/abc").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_text(response).await;
    assert_eq!(body, "");
}

#[tokio::test]
async fn test_get_fractional_id_is_404() {
    let app = common::build_test_app();
    let response = get(app, "/movies/5.5").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// PUT /movies/{id}
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_update_unparsable_id_is_404_before_body_checks() {
    let app = common::build_test_app();
    // The body would fail validation, but the id short-circuits first.
    let response = put_json(app, "/movies/abc", serde_json::json!({"name": 5})).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_text(response).await;
    assert_eq!(body, "");
}

#[tokio::test]
async fn test_update_empty_body_is_successful_noop() {
    let app = common::build_test_app();
    let response = put_json(app, "/movies/1", serde_json::json!({})).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json, serde_json::json!({"errors": null}));
}

#[tokio::test]
async fn test_update_all_falsy_fields_is_successful_noop() {
    let app = common::build_test_app();
    let response = put_json(
        app,
        "/movies/1",
        serde_json::json!({"name": "", "desc": "", "year-release": 0}),
    )
    .await;

    let json = body_json(response).await;
    assert_eq!(json, serde_json::json!({"errors": null}));
}

#[tokio::test]
async fn test_update_unparsable_year_degrades_to_not_supplied() {
    let app = common::build_test_app();
    let response = put_json(app, "/movies/1", serde_json::json!({"year-release": "abc"})).await;

    let json = body_json(response).await;
    assert_eq!(json, serde_json::json!({"errors": null}));
}

#[tokio::test]
async fn test_update_wrong_type_reports_must_be_string() {
    let app = common::build_test_app();
    let response = put_json(app, "/movies/1", serde_json::json!({"name": 5})).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json, serde_json::json!({"errors": ["must be string"]}));
}

// ---------------------------------------------------------------------------
// DELETE /movies/{id}
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_delete_unparsable_id_answers_zero() {
    let app = common::build_test_app();
    let response = delete(app, "/movies/abc").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert_eq!(body, "0");
}

// ---------------------------------------------------------------------------
// POST /movies/{id}/attach-actor
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_attach_unparsable_movie_id_answers_plain_success() {
    let app = common::build_test_app();
    let response = post_json(
        app,
        "/movies/abc/attach-actor",
        serde_json::json!({"id": 7}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json, serde_json::json!({"errors": null}));
}

#[tokio::test]
async fn test_attach_missing_actor_id_must_be_integer() {
    let app = common::build_test_app();
    let response = post_json(app, "/movies/1/attach-actor", serde_json::json!({})).await;

    let json = body_json(response).await;
    assert_eq!(json, serde_json::json!({"errors": ["must be integer"]}));
}

#[tokio::test]
async fn test_attach_unparsable_actor_id_must_be_integer() {
    let app = common::build_test_app();
    let response = post_json(
        app,
        "/movies/1/attach-actor",
        serde_json::json!({"id": "abc"}),
    )
    .await;

    let json = body_json(response).await;
    assert_eq!(json, serde_json::json!({"errors": ["must be integer"]}));
}
