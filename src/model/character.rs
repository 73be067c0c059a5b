use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CharacterDto {
    pub id: i32,
    pub name: String,
    pub height: String,
    pub eye_color: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct NewCharacterDto {
    pub name: String,
    pub height: String,
    pub eye_color: String,
}

/// A character marked as favorite by a user
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FavoriteCharacterDto {
    pub id: i32,
    pub user_id: i32,
    pub character_id: i32,
}
