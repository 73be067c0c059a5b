use sea_orm::DatabaseConnection;

use crate::{
    model::planet::{NewPlanetDto, PlanetDto},
    server::{data::planet::PlanetRepository, error::api::ApiError, error::Error},
};

/// Service for reading and managing planets.
pub struct PlanetService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlanetService<'a> {
    /// Creates a new instance of [`PlanetService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists every planet in insertion order
    pub async fn get_planets(&self) -> Result<Vec<PlanetDto>, Error> {
        let planets = PlanetRepository::new(self.db).get_all().await?;

        Ok(planets.into_iter().map(PlanetDto::from).collect())
    }

    /// Retrieves a single planet, 404 if absent
    pub async fn get_planet(&self, id: i32) -> Result<PlanetDto, Error> {
        match PlanetRepository::new(self.db).get_by_id(id).await? {
            Some(planet) => Ok(planet.into()),
            None => Err(planet_not_found(id).into()),
        }
    }

    /// Creates a planet; duplicate names surface as a unique constraint violation
    pub async fn create_planet(&self, new: NewPlanetDto) -> Result<PlanetDto, Error> {
        let planet = PlanetRepository::new(self.db)
            .create(new.name, new.population, new.size)
            .await?;

        Ok(planet.into())
    }

    /// Deletes a planet, 404 if absent
    pub async fn delete_planet(&self, id: i32) -> Result<(), Error> {
        let result = PlanetRepository::new(self.db).delete(id).await?;

        if result.rows_affected == 0 {
            return Err(planet_not_found(id).into());
        }

        Ok(())
    }
}

fn planet_not_found(id: i32) -> ApiError {
    ApiError::not_found(format!("Planet {} not found", id))
}
