//! Tests for the favorite character endpoints.
//!
//! These act on behalf of user 1, so most setups queue the current user first.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use holocron::server::controller::favorite::{
    add_favorite_character, delete_favorite_character, get_user_favorites,
};
use sea_orm::{EntityTrait, PaginatorTrait};

use super::*;

/// Expect exactly one row tied to user 1, echoed as `{id, user_id, character_id}`
#[tokio::test]
async fn adds_favorite_for_current_user() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_migrations()
        .with_current_user()
        .with_character("Luke Skywalker")
        .with_character("Han Solo")
        .build()
        .await?;

    let resp = add_favorite_character(State(test.to_app_state()), Path(2))
        .await
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["result"]["id"], 1);
    assert_eq!(body["result"]["user_id"], 1);
    assert_eq!(body["result"]["character_id"], 2);

    let count = entity::prelude::FavoriteCharacter::find()
        .count(&test.db)
        .await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Expect 404 when favoriting a character that does not exist
#[tokio::test]
async fn add_not_found_for_missing_character() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_migrations()
        .with_current_user()
        .build()
        .await?;

    let result = add_favorite_character(State(test.to_app_state()), Path(7)).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 404 when the current user does not exist
#[tokio::test]
async fn add_not_found_without_current_user() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_migrations()
        .with_character("Luke Skywalker")
        .build()
        .await?;

    let result = add_favorite_character(State(test.to_app_state()), Path(1)).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 409 when the character is already a favorite
#[tokio::test]
async fn add_conflict_for_existing_favorite() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_migrations()
        .with_current_user()
        .with_character("Luke Skywalker")
        .with_favorite(1, 1)
        .build()
        .await?;

    let result = add_favorite_character(State(test.to_app_state()), Path(1)).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}

/// Expect the deleted favorite to disappear from the current user's favorites
#[tokio::test]
async fn deleted_favorite_is_excluded_from_list() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_migrations()
        .with_current_user()
        .with_character("Luke Skywalker")
        .with_character("Han Solo")
        .with_favorite(1, 1)
        .with_favorite(1, 2)
        .build()
        .await?;

    let resp = delete_favorite_character(State(test.to_app_state()), Path(1))
        .await
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["result"], "deleted");

    let resp = get_user_favorites(State(test.to_app_state()))
        .await
        .unwrap()
        .into_response();

    let body = body_json(resp).await;
    let results = body["results"].as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["name"], "Han Solo");

    Ok(())
}

/// Expect 404 when deleting a favorite that does not exist
#[tokio::test]
async fn delete_not_found_for_missing_favorite() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;

    let result = delete_favorite_character(State(test.to_app_state()), Path(1)).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect only the current user's favorites as full characters
#[tokio::test]
async fn lists_only_current_user_favorites() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_migrations()
        .with_current_user()
        .with_user("other@example.com")
        .with_character("Luke Skywalker")
        .with_character("Han Solo")
        .with_favorite(2, 1)
        .with_favorite(1, 2)
        .build()
        .await?;

    let resp = get_user_favorites(State(test.to_app_state()))
        .await
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    let results = body["results"].as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["id"], 2);
    assert_eq!(results[0]["eye_color"], "blue");

    Ok(())
}
