use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, ItemDto, ListDto},
        character::CharacterDto,
    },
    server::{error::Error, model::app::AppState, service::character::CharacterService},
};

/// OpenAPI tag for character routes
pub static CHARACTER_TAG: &str = "character";

/// List every character
#[utoipa::path(
    get,
    path = "/characters",
    tag = CHARACTER_TAG,
    responses(
        (status = 200, description = "All characters in insertion order", body = ListDto<CharacterDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_characters(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let characters = CharacterService::new(&state.db).get_characters().await?;

    Ok((
        StatusCode::OK,
        Json(ListDto::new("This is the list of characters", characters)),
    ))
}

/// Get one character by ID
#[utoipa::path(
    get,
    path = "/characters/{id}",
    tag = CHARACTER_TAG,
    params(("id" = i32, Path, description = "Character ID")),
    responses(
        (status = 200, description = "The character", body = ItemDto<CharacterDto>),
        (status = 404, description = "Character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_character(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let character = CharacterService::new(&state.db).get_character(id).await?;

    Ok((
        StatusCode::OK,
        Json(ItemDto::new("This is one character", character)),
    ))
}
