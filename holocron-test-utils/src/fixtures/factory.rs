//! Factory functions for generating mock database models.
//!
//! These are in-memory model instances that don't require database interaction,
//! suitable for unit tests of DTO conversions.

use crate::{
    constant::{TEST_CHARACTER_EYE_COLOR, TEST_CHARACTER_HEIGHT, TEST_PASSWORD_HASH},
    model::{CharacterModel, FavoriteCharacterModel, PlanetModel, ShipModel, UserModel},
};

/// Create a mock user model with an active account.
pub fn mock_user_model(id: i32, email: &str) -> UserModel {
    UserModel {
        id,
        email: email.to_string(),
        password_hash: TEST_PASSWORD_HASH.to_string(),
        is_active: true,
    }
}

/// Create a mock character model with placeholder height and eye color.
pub fn mock_character_model(id: i32, name: &str) -> CharacterModel {
    CharacterModel {
        id,
        name: name.to_string(),
        height: TEST_CHARACTER_HEIGHT.to_string(),
        eye_color: TEST_CHARACTER_EYE_COLOR.to_string(),
    }
}

/// Create a mock planet model.
pub fn mock_planet_model(
    id: i32,
    name: &str,
    population: Option<i32>,
    size: Option<i32>,
) -> PlanetModel {
    PlanetModel {
        id,
        name: name.to_string(),
        population,
        size,
    }
}

/// Create a mock ship model.
pub fn mock_ship_model(id: i32, name: &str, model: Option<&str>, usage: Option<&str>) -> ShipModel {
    ShipModel {
        id,
        name: name.to_string(),
        model: model.map(str::to_string),
        usage: usage.map(str::to_string),
    }
}

/// Create a mock favorite character join row.
pub fn mock_favorite_character_model(
    id: i32,
    user_id: i32,
    character_id: i32,
) -> FavoriteCharacterModel {
    FavoriteCharacterModel {
        id,
        user_id,
        character_id,
    }
}
