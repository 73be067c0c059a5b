use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::db::{CharacterModel, FavoriteCharacterModel};

/// Repository for favorite characters.
pub struct FavoriteCharacterRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FavoriteCharacterRepository<'a, C> {
    /// Creates a new instance of [`FavoriteCharacterRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Marks a character as favorite for a user
    ///
    /// Fails with a foreign key violation if either the user or the character does not
    /// exist, and with a unique violation if the pair is already present.
    pub async fn create(
        &self,
        user_id: i32,
        character_id: i32,
    ) -> Result<FavoriteCharacterModel, DbErr> {
        let favorite = entity::favorite_character::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            character_id: ActiveValue::Set(character_id),
            ..Default::default()
        };

        favorite.insert(self.db).await
    }

    /// Gets the favorite row for a user and character pair, if any
    pub async fn get_by_user_and_character(
        &self,
        user_id: i32,
        character_id: i32,
    ) -> Result<Option<FavoriteCharacterModel>, DbErr> {
        entity::prelude::FavoriteCharacter::find()
            .filter(entity::favorite_character::Column::UserId.eq(user_id))
            .filter(entity::favorite_character::Column::CharacterId.eq(character_id))
            .one(self.db)
            .await
    }

    /// Gets every favorite row of every user in insertion order
    pub async fn get_all(&self) -> Result<Vec<FavoriteCharacterModel>, DbErr> {
        entity::prelude::FavoriteCharacter::find()
            .order_by_asc(entity::favorite_character::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets the characters a user has marked as favorite, in the order they were favorited
    pub async fn get_characters_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Vec<CharacterModel>, DbErr> {
        entity::prelude::Character::find()
            .inner_join(entity::favorite_character::Entity)
            .filter(entity::favorite_character::Column::UserId.eq(user_id))
            .order_by_asc(entity::favorite_character::Column::Id)
            .all(self.db)
            .await
    }

    /// Deletes a favorite by its own ID
    ///
    /// Check [`DeleteResult::rows_affected`] to know whether the favorite existed.
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::FavoriteCharacter::delete_by_id(id)
            .exec(self.db)
            .await
    }
}
