use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::error::AppError;
use crate::infra::db::ping;
use crate::state::app_state::AppState;

async fn health(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    if ping(&app_state.db).await {
        Ok(HttpResponse::Ok().body("ok"))
    } else {
        Err(AppError::db_unavailable(
            "database did not answer the liveness probe".to_string(),
        ))
    }
}

async fn info(app_state: web::Data<AppState>) -> HttpResponse {
    let settings = &app_state.settings;
    HttpResponse::Ok().json(json!({
        "status": "ok",
        "env": settings.env,
        "app_name": settings.project_name,
        "app_version": settings.app_version,
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health))
        .route("/info", web::get().to(info));
}
