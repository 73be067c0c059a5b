use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ShipDto {
    pub id: i32,
    pub name: String,
    pub model: Option<String>,
    /// What the ship is used for
    #[serde(rename = "use")]
    pub usage: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct NewShipDto {
    pub name: String,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default, rename = "use")]
    pub usage: Option<String>,
}
