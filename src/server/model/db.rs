//! Database model type aliases and their conversions into API DTOs.
//!
//! The aliases give a single point of reference for SeaORM entity models. Conversions
//! live here so `crate::model` stays free of database types.

use crate::model::{
    character::{CharacterDto, FavoriteCharacterDto},
    planet::PlanetDto,
    ship::ShipDto,
    user::UserDto,
};

/// Type alias for user database model.
///
/// # Fields (from `entity::user::Model`)
/// - `id` - Primary key
/// - `email` - Unique login email
/// - `password_hash` - Argon2id PHC string, never serialized
/// - `is_active` - Whether the account is active
pub type UserModel = entity::user::Model;

/// Type alias for character database model.
pub type CharacterModel = entity::character::Model;

/// Type alias for planet database model.
pub type PlanetModel = entity::planet::Model;

/// Type alias for ship database model.
pub type ShipModel = entity::ship::Model;

/// Type alias for the join row linking a user to a favorite character.
///
/// # Fields (from `entity::favorite_character::Model`)
/// - `id` - Primary key, used to delete the favorite
/// - `user_id` - Foreign key to the user
/// - `character_id` - Foreign key to the character
pub type FavoriteCharacterModel = entity::favorite_character::Model;

impl From<UserModel> for UserDto {
    fn from(model: UserModel) -> Self {
        Self {
            id: model.id,
            email: model.email,
            is_active: model.is_active,
        }
    }
}

impl From<CharacterModel> for CharacterDto {
    fn from(model: CharacterModel) -> Self {
        Self {
            id: model.id,
            name: model.name,
            height: model.height,
            eye_color: model.eye_color,
        }
    }
}

impl From<PlanetModel> for PlanetDto {
    fn from(model: PlanetModel) -> Self {
        Self {
            id: model.id,
            name: model.name,
            population: model.population,
            size: model.size,
        }
    }
}

impl From<ShipModel> for ShipDto {
    fn from(model: ShipModel) -> Self {
        Self {
            id: model.id,
            name: model.name,
            model: model.model,
            usage: model.usage,
        }
    }
}

impl From<FavoriteCharacterModel> for FavoriteCharacterDto {
    fn from(model: FavoriteCharacterModel) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            character_id: model.character_id,
        }
    }
}
