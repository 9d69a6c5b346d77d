use sea_orm::DatabaseConnection;

use crate::config::settings::Settings;
use crate::error::AppError;
use crate::infra::db::connect_db;
use crate::state::app_state::AppState;

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    settings: Option<Settings>,
    conn: Option<DatabaseConnection>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            settings: None,
            conn: None,
        }
    }

    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = Some(settings);
        self
    }

    /// Use an already-established connection instead of dialing one from
    /// settings. Tests inject a migrated in-memory database here.
    pub fn with_connection(mut self, conn: DatabaseConnection) -> Self {
        self.conn = Some(conn);
        self
    }

    pub async fn build(self) -> Result<AppState, AppError> {
        let settings = match self.settings {
            Some(settings) => settings,
            None => Settings::from_env()?,
        };
        let conn = match self.conn {
            Some(conn) => conn,
            None => connect_db(&settings).await?,
        };
        Ok(AppState::new(conn, settings))
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
