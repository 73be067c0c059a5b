//! Server application core modules.
//!
//! This module contains all server-side functionality: HTTP routing, controllers, services,
//! database repositories, error handling and configuration.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

/// Environment-driven configuration.
pub mod config;
/// HTTP request handlers.
pub mod controller;
/// Repositories over the database entities.
pub mod data;
/// Error types and their HTTP responses.
pub mod error;
/// Application state and database model aliases.
pub mod model;
/// Route registration and OpenAPI documentation.
pub mod router;
/// Business logic between controllers and repositories.
pub mod service;
/// Database connection and server startup.
pub mod startup;
/// Shared utilities.
pub mod util;
