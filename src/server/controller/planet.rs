use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, ItemDto, ListDto},
        planet::PlanetDto,
    },
    server::{error::Error, model::app::AppState, service::planet::PlanetService},
};

/// OpenAPI tag for planet routes
pub static PLANET_TAG: &str = "planet";

/// List every planet
#[utoipa::path(
    get,
    path = "/planets",
    tag = PLANET_TAG,
    responses(
        (status = 200, description = "All planets in insertion order", body = ListDto<PlanetDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_planets(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let planets = PlanetService::new(&state.db).get_planets().await?;

    Ok((
        StatusCode::OK,
        Json(ListDto::new("This is the list of planets", planets)),
    ))
}

/// Get one planet by ID
#[utoipa::path(
    get,
    path = "/planets/{id}",
    tag = PLANET_TAG,
    params(("id" = i32, Path, description = "Planet ID")),
    responses(
        (status = 200, description = "The planet", body = ItemDto<PlanetDto>),
        (status = 404, description = "Planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_planet(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let planet = PlanetService::new(&state.db).get_planet(id).await?;

    Ok((StatusCode::OK, Json(ItemDto::new("This is one planet", planet))))
}
