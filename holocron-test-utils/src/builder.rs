//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! The builder pattern allows chaining multiple configuration methods together, with all operations
//! queued and executed during the final `build()` call.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{constant::TEST_USER_EMAIL, error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test environments with database tables and
/// fixture rows. Methods can be chained together and finalized with `build()`.
pub struct TestBuilder {
    // Schema
    tables: Vec<TableCreateStatement>,
    migrations: bool,

    // Database fixtures to insert
    users: Vec<String>,
    characters: Vec<String>,
    planets: Vec<String>,
    ships: Vec<String>,
    favorites: Vec<(i32, i32)>, // (user_id, character_id)
}

impl TestBuilder {
    /// Create a new TestBuilder.
    ///
    /// Initializes an empty builder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            migrations: false,
            users: Vec::new(),
            characters: Vec::new(),
            planets: Vec::new(),
            ships: Vec::new(),
            favorites: Vec::new(),
        }
    }

    /// Create the full schema by applying every migration.
    ///
    /// Runs before any table added with [`Self::with_table`].
    pub fn with_migrations(mut self) -> Self {
        self.migrations = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, which will be executed during `build()`.
    /// Chain multiple calls to add multiple tables; parents must come before children so
    /// foreign keys resolve.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use holocron_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), holocron_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(User)
    ///     .with_table(Character)
    ///     .with_table(FavoriteCharacter)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a user with the given email.
    ///
    /// Users are inserted in the order they are queued, starting at ID 1.
    pub fn with_user(mut self, email: impl Into<String>) -> Self {
        self.users.push(email.into());
        self
    }

    /// Insert the user that unauthenticated endpoints act on behalf of.
    ///
    /// Must be the first queued user for it to receive ID 1.
    pub fn with_current_user(self) -> Self {
        self.with_user(TEST_USER_EMAIL)
    }

    /// Insert a character with the given name and placeholder height and eye color.
    pub fn with_character(mut self, name: impl Into<String>) -> Self {
        self.characters.push(name.into());
        self
    }

    /// Insert a planet with the given name and no population or size.
    pub fn with_planet(mut self, name: impl Into<String>) -> Self {
        self.planets.push(name.into());
        self
    }

    /// Insert a ship with the given name and no model or use.
    pub fn with_ship(mut self, name: impl Into<String>) -> Self {
        self.ships.push(name.into());
        self
    }

    /// Mark a character as favorite for a user.
    ///
    /// Both rows must be queued (or otherwise exist) before `build()` inserts the favorite.
    pub fn with_favorite(mut self, user_id: i32, character_id: i32) -> Self {
        self.favorites.push((user_id, character_id));
        self
    }

    /// Build the test context by creating all configured tables and fixtures.
    ///
    /// Executes all queued operations in the following order:
    /// 1. Applies migrations if requested, then creates custom tables
    /// 2. Inserts users, characters, planets, ships, then favorites
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Schema creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let setup = TestContext::new().await?;

        // 1. Create tables
        if self.migrations {
            setup.with_migrations().await?;
        }

        setup.with_tables(self.tables).await?;

        // 2. Insert fixtures
        for email in self.users {
            setup.user().insert_user(&email).await?;
        }

        for name in self.characters {
            setup.galaxy().insert_character(&name).await?;
        }

        for name in self.planets {
            setup.galaxy().insert_planet(&name, None, None).await?;
        }

        for name in self.ships {
            setup.galaxy().insert_ship(&name, None, None).await?;
        }

        for (user_id, character_id) in self.favorites {
            setup
                .user()
                .insert_favorite_character(user_id, character_id)
                .await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
