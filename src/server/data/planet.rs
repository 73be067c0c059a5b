use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait, QueryOrder,
};

use crate::server::model::db::PlanetModel;

/// Repository for planets.
pub struct PlanetRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlanetRepository<'a, C> {
    /// Creates a new instance of [`PlanetRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new planet
    pub async fn create(
        &self,
        name: String,
        population: Option<i32>,
        size: Option<i32>,
    ) -> Result<PlanetModel, DbErr> {
        let planet = entity::planet::ActiveModel {
            name: ActiveValue::Set(name),
            population: ActiveValue::Set(population),
            size: ActiveValue::Set(size),
            ..Default::default()
        };

        planet.insert(self.db).await
    }

    /// Gets all planets in insertion order
    pub async fn get_all(&self) -> Result<Vec<PlanetModel>, DbErr> {
        entity::prelude::Planet::find()
            .order_by_asc(entity::planet::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets a planet by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<PlanetModel>, DbErr> {
        entity::prelude::Planet::find_by_id(id).one(self.db).await
    }

    /// Deletes a planet
    ///
    /// Check [`DeleteResult::rows_affected`] to know whether the planet existed.
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Planet::delete_by_id(id).exec(self.db).await
    }
}
