pub mod prelude;

pub mod character;
pub mod favorite_character;
pub mod planet;
pub mod ship;
pub mod user;
