//! Tests for the administrative endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use holocron::{
    model::{
        character::NewCharacterDto, planet::NewPlanetDto, ship::NewShipDto, user::NewUserDto,
    },
    server::controller::admin::{
        create_character, create_planet, create_ship, create_user, delete_character,
        delete_planet, delete_ship, delete_user, get_favorites, get_users,
    },
};
use sea_orm::EntityTrait;

use super::*;

fn new_character(name: &str) -> NewCharacterDto {
    NewCharacterDto {
        name: name.to_string(),
        height: "172".to_string(),
        eye_color: "blue".to_string(),
    }
}

/// Expect 201 and the created user without any password field
#[tokio::test]
async fn creates_user_without_exposing_password() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;

    let resp = create_user(
        State(test.to_app_state()),
        Json(NewUserDto {
            email: "luke@example.com".to_string(),
            password: "usetheforce".to_string(),
            is_active: true,
        }),
    )
    .await
    .unwrap()
    .into_response();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = body_json(resp).await;
    assert_eq!(body["result"]["email"], "luke@example.com");
    assert_eq!(body["result"]["is_active"], true);
    assert!(body["result"].get("password").is_none());
    assert!(body["result"].get("password_hash").is_none());

    let user = entity::prelude::User::find_by_id(1)
        .one(&test.db)
        .await?
        .unwrap();
    assert_ne!(user.password_hash, "usetheforce");

    Ok(())
}

/// Expect 409 when registering an email twice
#[tokio::test]
async fn create_user_conflict_for_duplicate_email() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_migrations()
        .with_user("luke@example.com")
        .build()
        .await?;

    let result = create_user(
        State(test.to_app_state()),
        Json(NewUserDto {
            email: "luke@example.com".to_string(),
            password: "usetheforce".to_string(),
            is_active: true,
        }),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}

/// Expect users listed in insertion order
#[tokio::test]
async fn lists_users() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_migrations()
        .with_current_user()
        .with_user("leia@example.com")
        .build()
        .await?;

    let resp = get_users(State(test.to_app_state()))
        .await
        .unwrap()
        .into_response();

    let body = body_json(resp).await;
    let results = body["results"].as_array().unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[1]["email"], "leia@example.com");

    Ok(())
}

/// Expect 409 when deleting a user that still has favorites
#[tokio::test]
async fn delete_user_conflict_while_referenced() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_migrations()
        .with_current_user()
        .with_character("Luke Skywalker")
        .with_favorite(1, 1)
        .build()
        .await?;

    let result = delete_user(State(test.to_app_state()), Path(1)).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}

/// Expect 404 when deleting a user that does not exist
#[tokio::test]
async fn delete_user_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;

    let result = delete_user(State(test.to_app_state()), Path(1)).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 201 for a new character and 409 for a second one with the same name
#[tokio::test]
async fn create_character_conflict_for_duplicate_name() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;

    let resp = create_character(
        State(test.to_app_state()),
        Json(new_character("Luke Skywalker")),
    )
    .await
    .unwrap()
    .into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = body_json(resp).await;
    assert_eq!(body["result"]["id"], 1);

    let result = create_character(
        State(test.to_app_state()),
        Json(new_character("Luke Skywalker")),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}

/// Expect a deleted character to be gone and a referenced one to conflict
#[tokio::test]
async fn deletes_character() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_migrations()
        .with_current_user()
        .with_character("Luke Skywalker")
        .with_character("Han Solo")
        .with_favorite(1, 2)
        .build()
        .await?;

    let resp = delete_character(State(test.to_app_state()), Path(1))
        .await
        .unwrap()
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["result"], "deleted");

    let result = delete_character(State(test.to_app_state()), Path(2)).await;
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let remaining = entity::prelude::Character::find().all(&test.db).await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].name, "Han Solo");

    Ok(())
}

/// Expect 409 when deleting a character that is still a favorite, leaving the row in place
#[tokio::test]
async fn delete_character_conflict_while_favorite() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_migrations()
        .with_current_user()
        .with_character("Luke Skywalker")
        .with_favorite(1, 1)
        .build()
        .await?;

    let result = delete_character(State(test.to_app_state()), Path(1)).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let body = body_json(resp).await;
    assert!(body["error"].is_string());

    let character = entity::prelude::Character::find_by_id(1)
        .one(&test.db)
        .await?;
    assert!(character.is_some());

    Ok(())
}

/// Expect 404 when deleting a planet that does not exist
#[tokio::test]
async fn delete_planet_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_migrations()
        .with_planet("Tatooine")
        .build()
        .await?;

    let result = delete_planet(State(test.to_app_state()), Path(99)).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = body_json(resp).await;
    assert_eq!(body["error"], "Planet 99 not found");

    Ok(())
}

/// Expect 404 when deleting a ship that does not exist
#[tokio::test]
async fn delete_ship_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_migrations()
        .with_ship("Slave I")
        .build()
        .await?;

    let result = delete_ship(State(test.to_app_state()), Path(99)).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = body_json(resp).await;
    assert_eq!(body["error"], "Ship 99 not found");

    Ok(())
}

/// Expect a planet to be created with optional fields and deleted again
#[tokio::test]
async fn creates_and_deletes_planet() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;

    let resp = create_planet(
        State(test.to_app_state()),
        Json(NewPlanetDto {
            name: "Dagobah".to_string(),
            population: None,
            size: Some(8900),
        }),
    )
    .await
    .unwrap()
    .into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = body_json(resp).await;
    assert!(body["result"]["population"].is_null());
    assert_eq!(body["result"]["size"], 8900);

    let resp = delete_planet(State(test.to_app_state()), Path(1))
        .await
        .unwrap()
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let result = delete_planet(State(test.to_app_state()), Path(1)).await;
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 409 when two ships share a model
#[tokio::test]
async fn create_ship_conflict_for_duplicate_model() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;
    test.galaxy()
        .insert_ship("Millennium Falcon", Some("YT-1300"), None)
        .await?;

    let result = create_ship(
        State(test.to_app_state()),
        Json(NewShipDto {
            name: "Stellar Envoy".to_string(),
            model: Some("YT-1300".to_string()),
            usage: None,
        }),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}

/// Expect ships without a model or use to coexist
#[tokio::test]
async fn creates_ships_without_optional_fields() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_migrations()
        .with_ship("Slave I")
        .build()
        .await?;

    let resp = create_ship(
        State(test.to_app_state()),
        Json(NewShipDto {
            name: "Tantive IV".to_string(),
            model: None,
            usage: None,
        }),
    )
    .await
    .unwrap()
    .into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = delete_ship(State(test.to_app_state()), Path(2))
        .await
        .unwrap()
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect every favorite of every user
#[tokio::test]
async fn lists_all_favorites() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_migrations()
        .with_current_user()
        .with_user("leia@example.com")
        .with_character("Luke Skywalker")
        .with_favorite(1, 1)
        .with_favorite(2, 1)
        .build()
        .await?;

    let resp = get_favorites(State(test.to_app_state()))
        .await
        .unwrap()
        .into_response();

    let body = body_json(resp).await;
    let results = body["results"].as_array().unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[1]["user_id"], 2);
    assert_eq!(results[1]["character_id"], 1);

    Ok(())
}
