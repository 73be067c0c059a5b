use sea_orm::DatabaseConnection;

use crate::{
    model::character::{CharacterDto, FavoriteCharacterDto},
    server::{
        data::{
            character::CharacterRepository, favorite_character::FavoriteCharacterRepository,
            user::UserRepository,
        },
        error::{api::ApiError, Error},
        service::{character::character_not_found, user::user_not_found},
    },
};

/// Service for users' favorite characters.
pub struct FavoriteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    /// Creates a new instance of [`FavoriteService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Marks a character as favorite for a user
    ///
    /// Both references are checked before insert so clients get a 404 instead of a
    /// foreign key violation.
    ///
    /// # Returns
    /// - `Ok(FavoriteCharacterDto)` - The new favorite row
    /// - `Err(Error::ApiError)` - 404 if the user or character does not exist, 409 if the
    ///   character is already a favorite of the user
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn add_favorite_character(
        &self,
        user_id: i32,
        character_id: i32,
    ) -> Result<FavoriteCharacterDto, Error> {
        let favorite_repo = FavoriteCharacterRepository::new(self.db);

        if UserRepository::new(self.db)
            .get_by_id(user_id)
            .await?
            .is_none()
        {
            tracing::warn!("Favorite requested for missing user ID {}", user_id);

            return Err(user_not_found(user_id).into());
        }

        if CharacterRepository::new(self.db)
            .get_by_id(character_id)
            .await?
            .is_none()
        {
            return Err(character_not_found(character_id).into());
        }

        if favorite_repo
            .get_by_user_and_character(user_id, character_id)
            .await?
            .is_some()
        {
            return Err(ApiError::conflict(format!(
                "Character {} is already a favorite",
                character_id
            ))
            .into());
        }

        let favorite = favorite_repo.create(user_id, character_id).await?;

        Ok(favorite.into())
    }

    /// Deletes a favorite by its own ID, 404 if absent
    pub async fn delete_favorite_character(&self, id: i32) -> Result<(), Error> {
        let result = FavoriteCharacterRepository::new(self.db).delete(id).await?;

        if result.rows_affected == 0 {
            return Err(ApiError::not_found(format!("Favorite {} not found", id)).into());
        }

        Ok(())
    }

    /// Lists the characters a user has marked as favorite
    pub async fn get_favorite_characters(&self, user_id: i32) -> Result<Vec<CharacterDto>, Error> {
        let characters = FavoriteCharacterRepository::new(self.db)
            .get_characters_by_user_id(user_id)
            .await?;

        Ok(characters.into_iter().map(CharacterDto::from).collect())
    }

    /// Lists every favorite row of every user
    pub async fn get_all_favorites(&self) -> Result<Vec<FavoriteCharacterDto>, Error> {
        let favorites = FavoriteCharacterRepository::new(self.db).get_all().await?;

        Ok(favorites
            .into_iter()
            .map(FavoriteCharacterDto::from)
            .collect())
    }
}
