use sea_orm::DatabaseConnection;

use crate::{
    model::user::{NewUserDto, UserDto},
    server::{
        data::user::UserRepository,
        error::{api::ApiError, Error},
        util::password::hash_password,
    },
};

/// Service for managing user accounts.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of [`UserService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists every user in insertion order, without password hashes
    pub async fn get_users(&self) -> Result<Vec<UserDto>, Error> {
        let users = UserRepository::new(self.db).get_all().await?;

        Ok(users.into_iter().map(UserDto::from).collect())
    }

    /// Creates a user, hashing the password before it is stored
    ///
    /// # Returns
    /// - `Ok(UserDto)` - User created
    /// - `Err(Error::PasswordError)` - Hashing failed
    /// - `Err(Error::DbErr)` - Email already registered or database failure
    pub async fn create_user(&self, new: NewUserDto) -> Result<UserDto, Error> {
        let password_hash = hash_password(&new.password)?;

        let user = UserRepository::new(self.db)
            .create(new.email, password_hash, new.is_active)
            .await?;

        Ok(user.into())
    }

    /// Deletes a user, 404 if absent
    ///
    /// Fails with a foreign key violation while the user still has favorites.
    pub async fn delete_user(&self, user_id: i32) -> Result<(), Error> {
        let result = UserRepository::new(self.db).delete(user_id).await?;

        if result.rows_affected == 0 {
            return Err(user_not_found(user_id).into());
        }

        Ok(())
    }
}

pub(crate) fn user_not_found(user_id: i32) -> ApiError {
    ApiError::not_found(format!("User {} not found", user_id))
}
