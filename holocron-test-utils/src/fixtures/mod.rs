//! Test fixture modules for database row creation.
//!
//! - `galaxy` - characters, planets and ships
//! - `user` - users and their favorite characters
//! - `factory` - in-memory models that never touch the database

pub mod factory;
pub mod galaxy;
pub mod user;
