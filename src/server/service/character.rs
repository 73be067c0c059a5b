use sea_orm::DatabaseConnection;

use crate::{
    model::character::{CharacterDto, NewCharacterDto},
    server::{data::character::CharacterRepository, error::api::ApiError, error::Error},
};

/// Service for reading and managing characters.
pub struct CharacterService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CharacterService<'a> {
    /// Creates a new instance of [`CharacterService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists every character in insertion order
    pub async fn get_characters(&self) -> Result<Vec<CharacterDto>, Error> {
        let characters = CharacterRepository::new(self.db).get_all().await?;

        Ok(characters.into_iter().map(CharacterDto::from).collect())
    }

    /// Retrieves a single character
    ///
    /// # Returns
    /// - `Ok(CharacterDto)` - Character found
    /// - `Err(Error::ApiError)` - 404 if no character has this ID
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_character(&self, id: i32) -> Result<CharacterDto, Error> {
        match CharacterRepository::new(self.db).get_by_id(id).await? {
            Some(character) => Ok(character.into()),
            None => Err(character_not_found(id).into()),
        }
    }

    /// Creates a character; duplicate names surface as a unique constraint violation
    pub async fn create_character(&self, new: NewCharacterDto) -> Result<CharacterDto, Error> {
        let character = CharacterRepository::new(self.db)
            .create(new.name, new.height, new.eye_color)
            .await?;

        Ok(character.into())
    }

    /// Deletes a character
    ///
    /// Fails with a foreign key violation while the character is still someone's favorite.
    pub async fn delete_character(&self, id: i32) -> Result<(), Error> {
        let result = CharacterRepository::new(self.db).delete(id).await?;

        if result.rows_affected == 0 {
            return Err(character_not_found(id).into());
        }

        Ok(())
    }
}

pub(crate) fn character_not_found(id: i32) -> ApiError {
    ApiError::not_found(format!("Character {} not found", id))
}
