use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, ItemDto, ListDto},
        character::{CharacterDto, FavoriteCharacterDto},
    },
    server::{
        error::Error,
        model::app::{AppState, CURRENT_USER_ID},
        service::favorite::FavoriteService,
    },
};

/// OpenAPI tag for favorite routes
pub static FAVORITE_TAG: &str = "favorite";

/// Mark a character as favorite for the current user
///
/// Both favorite routes share the `{id}` segment; here it is the character ID.
#[utoipa::path(
    post,
    path = "/favorite/characters/{id}",
    tag = FAVORITE_TAG,
    params(("id" = i32, Path, description = "ID of the character to mark as favorite")),
    responses(
        (status = 200, description = "The created favorite", body = ItemDto<FavoriteCharacterDto>),
        (status = 404, description = "Character or current user not found", body = ErrorDto),
        (status = 409, description = "Character is already a favorite", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite_character(
    State(state): State<AppState>,
    Path(character_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let favorite = FavoriteService::new(&state.db)
        .add_favorite_character(CURRENT_USER_ID, character_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ItemDto::new("Favorite character added", favorite)),
    ))
}

/// Delete a favorite by the favorite row's own ID
#[utoipa::path(
    delete,
    path = "/favorite/characters/{id}",
    tag = FAVORITE_TAG,
    params(("id" = i32, Path, description = "ID of the favorite row")),
    responses(
        (status = 200, description = "Favorite deleted", body = ItemDto<String>),
        (status = 404, description = "Favorite not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_favorite_character(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    FavoriteService::new(&state.db)
        .delete_favorite_character(id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ItemDto::new("Favorite character deleted", "deleted".to_string())),
    ))
}

/// List the current user's favorite characters
#[utoipa::path(
    get,
    path = "/users/favorites",
    tag = FAVORITE_TAG,
    responses(
        (status = 200, description = "Favorite characters of the current user", body = ListDto<CharacterDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_favorites(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let characters = FavoriteService::new(&state.db)
        .get_favorite_characters(CURRENT_USER_ID)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ListDto::new("These are your favorites", characters)),
    ))
}
