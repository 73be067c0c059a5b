use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PlanetDto {
    pub id: i32,
    pub name: String,
    pub population: Option<i32>,
    pub size: Option<i32>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct NewPlanetDto {
    pub name: String,
    #[serde(default)]
    pub population: Option<i32>,
    #[serde(default)]
    pub size: Option<i32>,
}
