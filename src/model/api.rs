use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// A response carrying only a message
#[derive(Serialize, Deserialize, ToSchema)]
pub struct MessageDto {
    pub msg: String,
}

/// A response carrying a message and a list of results
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ListDto<T> {
    pub msg: String,
    pub results: Vec<T>,
}

/// A response carrying a message and a single result
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ItemDto<T> {
    pub msg: String,
    pub result: T,
}

impl MessageDto {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }
}

impl<T> ListDto<T> {
    pub fn new(msg: impl Into<String>, results: Vec<T>) -> Self {
        Self {
            msg: msg.into(),
            results,
        }
    }
}

impl<T> ItemDto<T> {
    pub fn new(msg: impl Into<String>, result: T) -> Self {
        Self {
            msg: msg.into(),
            result,
        }
    }
}
