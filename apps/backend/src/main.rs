use actix_web::{web, App, HttpServer};
use backend::infra::state::build_state;
use backend::middleware::cors::cors_middleware;
use backend::middleware::request_trace::RequestTrace;
use backend::middleware::structured_logger::StructuredLogger;
use backend::routes;
use backend::Settings;

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Environment variables must be set by the runtime environment:
    // - Docker: via compose env_file or docker run --env-file
    // - Local dev: source env files manually (set -a; . ./.env; set +a)
    let settings = match Settings::from_env() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    telemetry::init_tracing(&settings.log_level);

    let port = settings.port;
    let allow_origins = settings.allow_origins.clone();

    tracing::info!(
        env = %settings.env,
        port,
        "starting {} {}",
        settings.project_name,
        settings.app_version
    );

    let app_state = match build_state().with_settings(settings).build().await {
        Ok(state) => state,
        Err(e) => {
            eprintln!("failed to build application state: {e}");
            std::process::exit(1);
        }
    };

    tracing::info!("database connected");

    let data = web::Data::new(app_state);

    HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware(&allow_origins))
            .wrap(StructuredLogger)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
