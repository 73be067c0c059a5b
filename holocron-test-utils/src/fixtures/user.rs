use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    constant::TEST_PASSWORD_HASH,
    error::TestError,
    model::{FavoriteCharacterModel, UserModel},
    TestContext,
};

impl TestContext {
    pub fn user(&self) -> UserFixtures<'_> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> UserFixtures<'a> {
    pub async fn insert_user(&self, email: &str) -> Result<UserModel, TestError> {
        Ok(entity::prelude::User::insert(entity::user::ActiveModel {
            email: ActiveValue::Set(email.to_string()),
            password_hash: ActiveValue::Set(TEST_PASSWORD_HASH.to_string()),
            is_active: ActiveValue::Set(true),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    pub async fn insert_favorite_character(
        &self,
        user_id: i32,
        character_id: i32,
    ) -> Result<FavoriteCharacterModel, TestError> {
        Ok(entity::prelude::FavoriteCharacter::insert(
            entity::favorite_character::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                character_id: ActiveValue::Set(character_id),
                ..Default::default()
            },
        )
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    /// Insert a user along with a character they have marked as favorite.
    pub async fn insert_user_with_favorite(
        &self,
        email: &str,
        character_name: &str,
    ) -> Result<(UserModel, FavoriteCharacterModel, entity::character::Model), TestError> {
        let user_model = self.insert_user(email).await?;
        let character_model = self
            .setup
            .galaxy()
            .insert_character(character_name)
            .await?;
        let favorite_model = self
            .insert_favorite_character(user_model.id, character_model.id)
            .await?;

        Ok((user_model, favorite_model, character_model))
    }
}
