//! Holocron: a CRUD API over characters, planets, ships and user favorites.

pub mod model;
pub mod server;
