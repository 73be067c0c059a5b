use sea_orm::DatabaseConnection;

/// Fixed user the favorites endpoints act on behalf of, in place of authentication.
pub const CURRENT_USER_ID: i32 = 1;

/// State shared by every handler.
#[derive(Clone)]
pub struct AppState {
    /// Connection pool
    pub db: DatabaseConnection,
}

impl From<DatabaseConnection> for AppState {
    fn from(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
