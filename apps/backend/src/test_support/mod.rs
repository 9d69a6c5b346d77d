//! Helpers for integration tests: an in-memory database migrated with
//! the real migrator, and a fully wired test service. Compiled into the
//! library so the `tests/` binaries can share them.

use actix_http::Request;
use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{test, web, App, Error};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::config::settings::Settings;
use crate::middleware::request_trace::RequestTrace;
use crate::middleware::structured_logger::StructuredLogger;
use crate::state::app_state::AppState;

/// Connect an in-memory SQLite database and bring it to the current
/// schema. Capped at one connection: every pooled connection to
/// `sqlite::memory:` would otherwise see its own empty database.
pub async fn connect_test_db() -> DatabaseConnection {
    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.min_connections(1).max_connections(1);

    let db = Database::connect(opt)
        .await
        .expect("connect to in-memory sqlite");
    Migrator::up(&db, None).await.expect("run migrations");
    db
}

/// AppState backed by a fresh migrated in-memory database and default
/// settings.
pub async fn test_state() -> AppState {
    let settings = Settings::from_env().expect("default settings");
    AppState::new(connect_test_db().await, settings)
}

/// Build the full service (routes + middleware) for in-process calls.
pub async fn create_test_app(
    data: web::Data<AppState>,
) -> impl Service<Request, Response = ServiceResponse<BoxBody>, Error = Error> {
    test::init_service(
        App::new()
            .wrap(StructuredLogger)
            .wrap(RequestTrace)
            .app_data(data)
            .configure(crate::routes::configure),
    )
    .await
}
