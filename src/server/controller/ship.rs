use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ErrorDto, ListDto},
        ship::ShipDto,
    },
    server::{error::Error, model::app::AppState, service::ship::ShipService},
};

/// OpenAPI tag for ship routes
pub static SHIP_TAG: &str = "ship";

/// List every ship
#[utoipa::path(
    get,
    path = "/ships",
    tag = SHIP_TAG,
    responses(
        (status = 200, description = "All ships in insertion order", body = ListDto<ShipDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_ships(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let ships = ShipService::new(&state.db).get_ships().await?;

    Ok((
        StatusCode::OK,
        Json(ListDto::new("This is the list of ships", ships)),
    ))
}
