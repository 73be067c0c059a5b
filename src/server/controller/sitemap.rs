use std::sync::Arc;

use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::model::api::ListDto;

/// List every documented route path
///
/// `paths` is collected from the generated OpenAPI document when the router is built, so
/// this handler is not itself part of that document.
pub async fn sitemap(paths: Arc<Vec<String>>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(ListDto::new("These are the available routes", paths.to_vec())),
    )
}
