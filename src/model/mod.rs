//! Data transfer objects exchanged with API clients.
//!
//! These types define the JSON shapes of request bodies and responses. They carry no
//! database types so the HTTP contract stays independent of the schema.

pub mod api;
pub mod character;
pub mod planet;
pub mod ship;
pub mod user;
