//! HTTP request handlers.
//!
//! Every handler is annotated with `#[utoipa::path]` so it is documented in the OpenAPI
//! document served at `/api/docs`. Handlers act for [`CURRENT_USER_ID`] where a user is
//! implied.
//!
//! [`CURRENT_USER_ID`]: crate::server::model::app::CURRENT_USER_ID

pub mod admin;
/// Character listing and lookup.
pub mod character;
/// Favorite characters of the current user.
pub mod favorite;
/// Planet listing and lookup.
pub mod planet;
/// Ship listing.
pub mod ship;
/// Listing of documented routes.
pub mod sitemap;
/// Current user greeting.
pub mod user;
