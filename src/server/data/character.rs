use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait, QueryOrder,
};

use crate::server::model::db::CharacterModel;

/// Repository for characters.
pub struct CharacterRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CharacterRepository<'a, C> {
    /// Creates a new instance of [`CharacterRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new character
    ///
    /// Fails with a unique constraint violation if the name is already taken.
    pub async fn create(
        &self,
        name: String,
        height: String,
        eye_color: String,
    ) -> Result<CharacterModel, DbErr> {
        let character = entity::character::ActiveModel {
            name: ActiveValue::Set(name),
            height: ActiveValue::Set(height),
            eye_color: ActiveValue::Set(eye_color),
            ..Default::default()
        };

        character.insert(self.db).await
    }

    /// Gets all characters in insertion order
    pub async fn get_all(&self) -> Result<Vec<CharacterModel>, DbErr> {
        entity::prelude::Character::find()
            .order_by_asc(entity::character::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets a character by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<CharacterModel>, DbErr> {
        entity::prelude::Character::find_by_id(id).one(self.db).await
    }

    /// Deletes a character
    ///
    /// Returns OK regardless of the character existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Character::delete_by_id(id)
            .exec(self.db)
            .await
    }
}
