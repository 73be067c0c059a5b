use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A user account; the password hash is never exposed
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub email: String,
    pub is_active: bool,
}

#[derive(Clone, Deserialize, ToSchema)]
pub struct NewUserDto {
    pub email: String,
    pub password: String,
    #[serde(default = "default_is_active")]
    pub is_active: bool,
}

fn default_is_active() -> bool {
    true
}
