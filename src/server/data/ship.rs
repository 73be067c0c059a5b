use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait, QueryOrder,
};

use crate::server::model::db::ShipModel;

/// Repository for ships.
pub struct ShipRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ShipRepository<'a, C> {
    /// Creates a new instance of [`ShipRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new ship
    ///
    /// `name` is always unique; `model` and `usage` are unique only when present.
    pub async fn create(
        &self,
        name: String,
        model: Option<String>,
        usage: Option<String>,
    ) -> Result<ShipModel, DbErr> {
        let ship = entity::ship::ActiveModel {
            name: ActiveValue::Set(name),
            model: ActiveValue::Set(model),
            usage: ActiveValue::Set(usage),
            ..Default::default()
        };

        ship.insert(self.db).await
    }

    /// Gets all ships in insertion order
    pub async fn get_all(&self) -> Result<Vec<ShipModel>, DbErr> {
        entity::prelude::Ship::find()
            .order_by_asc(entity::ship::Column::Id)
            .all(self.db)
            .await
    }

    /// Deletes a ship
    ///
    /// Check [`DeleteResult::rows_affected`] to know whether the ship existed.
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Ship::delete_by_id(id).exec(self.db).await
    }
}
