use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::debug;

use crate::config::db::{apply_statement_timeout, database_url};
use crate::config::settings::Settings;
use crate::error::AppError;

/// Connect the process-wide pool.
///
/// Called exactly once at startup (through the state builder); the
/// returned handle is cloned into request handlers via `AppState`.
/// sqlx exposes a single upper bound, so the pool_size + max_overflow
/// pair collapses into `max_connections`, with `pool_size` kept warm.
pub async fn connect_db(settings: &Settings) -> Result<DatabaseConnection, AppError> {
    let url = apply_statement_timeout(
        &database_url(settings)?,
        settings.db_statement_timeout_ms,
    );

    let mut opt = ConnectOptions::new(url);
    opt.min_connections(settings.db_pool_size)
        .max_connections(settings.db_pool_size + settings.db_max_overflow)
        .acquire_timeout(Duration::from_secs(settings.db_pool_timeout))
        // Pre-ping: a stale pooled connection is replaced transparently
        // instead of surfacing as a request error.
        .test_before_acquire(true)
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .map_err(|e| AppError::db_unavailable(format!("failed to connect to database: {e}")))?;

    debug!(
        pool_size = settings.db_pool_size,
        max_overflow = settings.db_max_overflow,
        "database pool established"
    );
    Ok(conn)
}

/// Liveness probe: true when a trivial round-trip succeeds.
/// Never returns an error.
pub async fn ping(db: &DatabaseConnection) -> bool {
    db.ping().await.is_ok()
}
