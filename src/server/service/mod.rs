//! Service layer.
//!
//! Services sit between controllers and repositories: they turn missing rows into
//! [`ApiError`](crate::server::error::api::ApiError)s and database models into DTOs.

/// Character service.
pub mod character;
/// Favorite character service.
pub mod favorite;
/// Planet service.
pub mod planet;
/// Ship service.
pub mod ship;
/// User account service.
pub mod user;
