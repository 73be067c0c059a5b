//! Data access layer repositories.
//!
//! Repositories provide an abstraction layer over database operations, one per entity.
//! Every method issues a single statement.

/// Character repository.
pub mod character;
/// Repository for the user/character favorite join table.
pub mod favorite_character;
/// Planet repository.
pub mod planet;
/// Ship repository.
pub mod ship;
/// User repository.
pub mod user;
