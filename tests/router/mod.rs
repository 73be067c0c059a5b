//! Tests for the assembled router.
//!
//! Requests go through `tower::ServiceExt::oneshot`, exercising path matching, extractors and
//! error responses together.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use holocron::server::{model::app::AppState, router};
use holocron_test_utils::prelude::*;
use tower::ServiceExt;

use crate::util::body_json;

fn app(test: &TestContext) -> Router {
    router::app(test.to_app_state::<AppState>())
}

fn request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Expect the sitemap to list documented paths in sorted order
#[tokio::test]
async fn sitemap_lists_sorted_paths() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;

    let resp = app(&test)
        .oneshot(request(Method::GET, "/"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    let paths: Vec<&str> = body["results"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p.as_str().unwrap())
        .collect();

    let mut sorted = paths.clone();
    sorted.sort();
    assert_eq!(paths, sorted);
    assert!(paths.contains(&"/characters/{id}"));
    assert!(paths.contains(&"/favorite/characters/{id}"));
    assert!(paths.contains(&"/users/favorites"));

    Ok(())
}

/// Expect the favorite routes to be reachable with a leading slash
#[tokio::test]
async fn favorite_routes_round_trip() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_migrations()
        .with_current_user()
        .with_character("Luke Skywalker")
        .build()
        .await?;

    let resp = app(&test)
        .oneshot(request(Method::POST, "/favorite/characters/1"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app(&test)
        .oneshot(request(Method::DELETE, "/favorite/characters/1"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app(&test)
        .oneshot(request(Method::GET, "/users/favorites"))
        .await
        .unwrap();
    let body = body_json(resp).await;
    assert_eq!(body["results"].as_array().unwrap().len(), 0);

    Ok(())
}

/// Expect a JSON 404 body for a missing character
#[tokio::test]
async fn missing_character_is_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;

    let resp = app(&test)
        .oneshot(request(Method::GET, "/characters/5"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = body_json(resp).await;
    assert_eq!(body["error"], "Character 5 not found");

    Ok(())
}

/// Expect non-integer IDs to be rejected by the path extractor
#[tokio::test]
async fn non_integer_id_is_bad_request() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;

    let resp = app(&test)
        .oneshot(request(Method::GET, "/planets/tatooine"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 409 through HTTP when creating two characters with the same name
#[tokio::test]
async fn duplicate_character_is_conflict() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;

    let create = || {
        Request::builder()
            .method(Method::POST)
            .uri("/admin/characters")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(
                r#"{"name":"Luke Skywalker","height":"172","eye_color":"blue"}"#,
            ))
            .unwrap()
    };

    let resp = app(&test).oneshot(create()).await.unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = app(&test).oneshot(create()).await.unwrap();
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let body = body_json(resp).await;
    assert!(body["error"].is_string());

    Ok(())
}

/// Expect the OpenAPI document to be served
#[tokio::test]
async fn serves_openapi_document() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;

    let resp = app(&test)
        .oneshot(request(Method::GET, "/api/docs/openapi.json"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["info"]["title"], "Holocron");

    Ok(())
}
