//! HTTP routing and OpenAPI documentation configuration.
//!
//! Every endpoint is registered here together with its OpenAPI specification, and Swagger
//! UI serves the generated document at `/api/docs`.

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's routes with Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /` - Sitemap of every documented path
/// - `GET /user` - Greeting for the current user
/// - `GET /characters`, `GET /characters/{id}` - Characters
/// - `POST /favorite/characters/{id}` - Mark character `{id}` as favorite of the current user
/// - `DELETE /favorite/characters/{id}` - Delete favorite row `{id}`
/// - `GET /planets`, `GET /planets/{id}` - Planets
/// - `GET /ships` - Ships
/// - `GET /users/favorites` - Favorite characters of the current user
/// - `/admin/...` - Creating and deleting rows of every table
///
/// The OpenAPI specification is served at `/api/docs/openapi.json`.
///
/// # Example
/// ```ignore
/// let router = routes().with_state(AppState { db });
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Holocron", description = "Holocron API"), tags(
        (name = controller::user::USER_TAG, description = "Current user routes"),
        (name = controller::character::CHARACTER_TAG, description = "Character routes"),
        (name = controller::favorite::FAVORITE_TAG, description = "Favorite character routes"),
        (name = controller::planet::PLANET_TAG, description = "Planet routes"),
        (name = controller::ship::SHIP_TAG, description = "Ship routes"),
        (name = controller::admin::ADMIN_TAG, description = "Administration routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::user::get_user))
        .routes(routes!(controller::character::get_characters))
        .routes(routes!(controller::character::get_character))
        .routes(routes!(
            controller::favorite::add_favorite_character,
            controller::favorite::delete_favorite_character
        ))
        .routes(routes!(controller::favorite::get_user_favorites))
        .routes(routes!(controller::planet::get_planets))
        .routes(routes!(controller::planet::get_planet))
        .routes(routes!(controller::ship::get_ships))
        .routes(routes!(
            controller::admin::get_users,
            controller::admin::create_user
        ))
        .routes(routes!(controller::admin::delete_user))
        .routes(routes!(controller::admin::create_character))
        .routes(routes!(controller::admin::delete_character))
        .routes(routes!(controller::admin::create_planet))
        .routes(routes!(controller::admin::delete_planet))
        .routes(routes!(controller::admin::create_ship))
        .routes(routes!(controller::admin::delete_ship))
        .routes(routes!(controller::admin::get_favorites))
        .split_for_parts();

    let mut paths: Vec<String> = api.paths.paths.keys().cloned().collect();
    paths.sort();
    let paths = Arc::new(paths);

    routes
        .route(
            "/",
            get(move || controller::sitemap::sitemap(paths.clone())),
        )
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}

/// Builds the complete application with state, CORS and request tracing applied.
pub fn app(state: AppState) -> Router {
    routes()
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
