//! Server application models.
//!
//! Application state shared by handlers and type aliases for database models.

/// Shared application state.
pub mod app;
/// Database model aliases and DTO conversions.
pub mod db;
