use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    constant::{TEST_CHARACTER_EYE_COLOR, TEST_CHARACTER_HEIGHT},
    error::TestError,
    model::{CharacterModel, PlanetModel, ShipModel},
    TestContext,
};

impl TestContext {
    pub fn galaxy(&self) -> GalaxyFixtures<'_> {
        GalaxyFixtures { setup: self }
    }
}

pub struct GalaxyFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> GalaxyFixtures<'a> {
    pub async fn insert_character(&self, name: &str) -> Result<CharacterModel, TestError> {
        Ok(
            entity::prelude::Character::insert(entity::character::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                height: ActiveValue::Set(TEST_CHARACTER_HEIGHT.to_string()),
                eye_color: ActiveValue::Set(TEST_CHARACTER_EYE_COLOR.to_string()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_planet(
        &self,
        name: &str,
        population: Option<i32>,
        size: Option<i32>,
    ) -> Result<PlanetModel, TestError> {
        Ok(
            entity::prelude::Planet::insert(entity::planet::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                population: ActiveValue::Set(population),
                size: ActiveValue::Set(size),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_ship(
        &self,
        name: &str,
        model: Option<&str>,
        usage: Option<&str>,
    ) -> Result<ShipModel, TestError> {
        Ok(entity::prelude::Ship::insert(entity::ship::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            model: ActiveValue::Set(model.map(str::to_string)),
            usage: ActiveValue::Set(usage.map(str::to_string)),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }
}
