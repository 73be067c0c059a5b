//! Database model type aliases for test utilities.
//!
//! These aliases match those in the main holocron crate to keep tests consistent.

/// Type alias for user database model.
pub type UserModel = entity::user::Model;

/// Type alias for character database model.
pub type CharacterModel = entity::character::Model;

/// Type alias for planet database model.
pub type PlanetModel = entity::planet::Model;

/// Type alias for ship database model.
pub type ShipModel = entity::ship::Model;

/// Type alias for favorite character join row.
pub type FavoriteCharacterModel = entity::favorite_character::Model;
