use sea_orm::DatabaseConnection;

use crate::{
    model::ship::{NewShipDto, ShipDto},
    server::{data::ship::ShipRepository, error::api::ApiError, error::Error},
};

/// Service for reading and managing ships.
pub struct ShipService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ShipService<'a> {
    /// Creates a new instance of [`ShipService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists every ship in insertion order
    pub async fn get_ships(&self) -> Result<Vec<ShipDto>, Error> {
        let ships = ShipRepository::new(self.db).get_all().await?;

        Ok(ships.into_iter().map(ShipDto::from).collect())
    }

    /// Creates a ship
    ///
    /// Name must be unique, as must model and use when present.
    pub async fn create_ship(&self, new: NewShipDto) -> Result<ShipDto, Error> {
        let ship = ShipRepository::new(self.db)
            .create(new.name, new.model, new.usage)
            .await?;

        Ok(ship.into())
    }

    /// Deletes a ship, 404 if absent
    pub async fn delete_ship(&self, id: i32) -> Result<(), Error> {
        let result = ShipRepository::new(self.db).delete(id).await?;

        if result.rows_affected == 0 {
            return Err(ApiError::not_found(format!("Ship {} not found", id)).into());
        }

        Ok(())
    }
}
