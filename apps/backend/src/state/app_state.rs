use sea_orm::DatabaseConnection;

use crate::config::settings::Settings;

/// Application state containing shared resources.
///
/// Built once at startup and cloned into workers; the connection pool
/// handle inside `db` is the process's single shared resource.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Pooled database connection
    pub db: DatabaseConnection,
    /// Immutable deployment settings
    pub settings: Settings,
}

impl AppState {
    pub fn new(db: DatabaseConnection, settings: Settings) -> Self {
        Self { db, settings }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}
