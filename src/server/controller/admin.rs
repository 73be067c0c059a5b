//! Administrative endpoints for seeding and removing rows.
//!
//! Creates respond `201 Created` with the new row, deletes respond with
//! `{"msg": .., "result": "deleted"}`.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, ItemDto, ListDto},
        character::{CharacterDto, FavoriteCharacterDto, NewCharacterDto},
        planet::{NewPlanetDto, PlanetDto},
        ship::{NewShipDto, ShipDto},
        user::{NewUserDto, UserDto},
    },
    server::{
        error::Error,
        model::app::AppState,
        service::{
            character::CharacterService, favorite::FavoriteService, planet::PlanetService,
            ship::ShipService, user::UserService,
        },
    },
};

/// OpenAPI tag for administration routes
pub static ADMIN_TAG: &str = "admin";

fn deleted(msg: &str) -> impl IntoResponse {
    (StatusCode::OK, Json(ItemDto::new(msg, "deleted".to_string())))
}

/// List every user
#[utoipa::path(
    get,
    path = "/admin/users",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "All users, without password hashes", body = ListDto<UserDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let users = UserService::new(&state.db).get_users().await?;

    Ok((
        StatusCode::OK,
        Json(ListDto::new("This is the list of users", users)),
    ))
}

/// Create a user
///
/// The password is hashed with Argon2id before it is stored.
#[utoipa::path(
    post,
    path = "/admin/users",
    tag = ADMIN_TAG,
    request_body = NewUserDto,
    responses(
        (status = 201, description = "User created", body = ItemDto<UserDto>),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    Json(new_user): Json<NewUserDto>,
) -> Result<impl IntoResponse, Error> {
    let user = UserService::new(&state.db).create_user(new_user).await?;

    Ok((StatusCode::CREATED, Json(ItemDto::new("User created", user))))
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/admin/users/{id}",
    tag = ADMIN_TAG,
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "User deleted", body = ItemDto<String>),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 409, description = "User still has favorites", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    UserService::new(&state.db).delete_user(id).await?;

    Ok(deleted("User deleted"))
}

/// Create a character
#[utoipa::path(
    post,
    path = "/admin/characters",
    tag = ADMIN_TAG,
    request_body = NewCharacterDto,
    responses(
        (status = 201, description = "Character created", body = ItemDto<CharacterDto>),
        (status = 409, description = "Name already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_character(
    State(state): State<AppState>,
    Json(new_character): Json<NewCharacterDto>,
) -> Result<impl IntoResponse, Error> {
    let character = CharacterService::new(&state.db)
        .create_character(new_character)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ItemDto::new("Character created", character)),
    ))
}

/// Delete a character
#[utoipa::path(
    delete,
    path = "/admin/characters/{id}",
    tag = ADMIN_TAG,
    params(("id" = i32, Path, description = "Character ID")),
    responses(
        (status = 200, description = "Character deleted", body = ItemDto<String>),
        (status = 404, description = "Character not found", body = ErrorDto),
        (status = 409, description = "Character is still a favorite", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_character(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    CharacterService::new(&state.db).delete_character(id).await?;

    Ok(deleted("Character deleted"))
}

/// Create a planet
#[utoipa::path(
    post,
    path = "/admin/planets",
    tag = ADMIN_TAG,
    request_body = NewPlanetDto,
    responses(
        (status = 201, description = "Planet created", body = ItemDto<PlanetDto>),
        (status = 409, description = "Name already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_planet(
    State(state): State<AppState>,
    Json(new_planet): Json<NewPlanetDto>,
) -> Result<impl IntoResponse, Error> {
    let planet = PlanetService::new(&state.db).create_planet(new_planet).await?;

    Ok((
        StatusCode::CREATED,
        Json(ItemDto::new("Planet created", planet)),
    ))
}

/// Delete a planet
#[utoipa::path(
    delete,
    path = "/admin/planets/{id}",
    tag = ADMIN_TAG,
    params(("id" = i32, Path, description = "Planet ID")),
    responses(
        (status = 200, description = "Planet deleted", body = ItemDto<String>),
        (status = 404, description = "Planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_planet(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    PlanetService::new(&state.db).delete_planet(id).await?;

    Ok(deleted("Planet deleted"))
}

/// Create a ship
#[utoipa::path(
    post,
    path = "/admin/ships",
    tag = ADMIN_TAG,
    request_body = NewShipDto,
    responses(
        (status = 201, description = "Ship created", body = ItemDto<ShipDto>),
        (status = 409, description = "Name, model or use already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_ship(
    State(state): State<AppState>,
    Json(new_ship): Json<NewShipDto>,
) -> Result<impl IntoResponse, Error> {
    let ship = ShipService::new(&state.db).create_ship(new_ship).await?;

    Ok((StatusCode::CREATED, Json(ItemDto::new("Ship created", ship))))
}

/// Delete a ship
#[utoipa::path(
    delete,
    path = "/admin/ships/{id}",
    tag = ADMIN_TAG,
    params(("id" = i32, Path, description = "Ship ID")),
    responses(
        (status = 200, description = "Ship deleted", body = ItemDto<String>),
        (status = 404, description = "Ship not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_ship(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    ShipService::new(&state.db).delete_ship(id).await?;

    Ok(deleted("Ship deleted"))
}

/// List every favorite of every user
#[utoipa::path(
    get,
    path = "/admin/favorites",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "All favorite rows", body = ListDto<FavoriteCharacterDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_favorites(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let favorites = FavoriteService::new(&state.db).get_all_favorites().await?;

    Ok((
        StatusCode::OK,
        Json(ListDto::new("This is the list of favorites", favorites)),
    ))
}
