use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::api::{ErrorDto, MessageDto},
    server::error::Error,
};

/// OpenAPI tag for user routes
pub static USER_TAG: &str = "user";

/// Greeting for the current user
#[utoipa::path(
    get,
    path = "/user",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Greeting message", body = MessageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user() -> Result<impl IntoResponse, Error> {
    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Hello, this is your GET /user response")),
    ))
}
