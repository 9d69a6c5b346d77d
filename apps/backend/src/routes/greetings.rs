use actix_web::{web, HttpRequest, HttpResponse};
use serde::{Deserialize, Serialize};
use time::format_description::well_known::Rfc3339;
use uuid::Uuid;

use crate::db::txn::with_txn;
use crate::entities::greetings;
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::extractors::ValidatedJson;
use crate::repos::greetings::{self as repo, GreetingCreate, GreetingPatch};
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
pub struct GreetingResponse {
    pub id: Uuid,
    pub sender: String,
    pub recipient: String,
    pub message: String,
    pub created_at: String,
}

impl From<greetings::Model> for GreetingResponse {
    fn from(model: greetings::Model) -> Self {
        let created_at = model
            .created_at
            .format(&Rfc3339)
            .unwrap_or_else(|_| model.created_at.to_string());
        Self {
            id: model.id,
            sender: model.sender,
            recipient: model.recipient,
            message: model.message,
            created_at,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateGreetingRequest {
    pub sender: String,
    pub recipient: String,
    pub message: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateGreetingRequest {
    #[serde(default)]
    pub sender: Option<String>,
    #[serde(default)]
    pub recipient: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
}

fn parse_greeting_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| {
        AppError::bad_request(
            ErrorCode::InvalidGreetingId,
            format!("'{raw}' is not a valid greeting id"),
        )
    })
}

async fn list_greetings(
    req: HttpRequest,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let rows = with_txn(Some(&req), &app_state, |txn| {
        Box::pin(async move { repo::list_greetings(txn).await.map_err(AppError::from) })
    })
    .await?;

    let body: Vec<GreetingResponse> = rows.into_iter().map(GreetingResponse::from).collect();
    Ok(HttpResponse::Ok().json(body))
}

async fn create_greeting(
    req: HttpRequest,
    app_state: web::Data<AppState>,
    body: ValidatedJson<CreateGreetingRequest>,
) -> Result<HttpResponse, AppError> {
    let payload = body.into_inner();
    let create = GreetingCreate {
        sender: payload.sender,
        recipient: payload.recipient,
        message: payload.message,
    };

    let row = with_txn(Some(&req), &app_state, move |txn| {
        Box::pin(async move { repo::create_greeting(txn, create).await.map_err(AppError::from) })
    })
    .await?;

    Ok(HttpResponse::Created().json(GreetingResponse::from(row)))
}

async fn get_greeting(
    req: HttpRequest,
    app_state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = parse_greeting_id(&path.into_inner())?;

    let row = with_txn(Some(&req), &app_state, move |txn| {
        Box::pin(async move { repo::get_greeting(txn, id).await.map_err(AppError::from) })
    })
    .await?;

    Ok(HttpResponse::Ok().json(GreetingResponse::from(row)))
}

async fn update_greeting(
    req: HttpRequest,
    app_state: web::Data<AppState>,
    path: web::Path<String>,
    body: ValidatedJson<UpdateGreetingRequest>,
) -> Result<HttpResponse, AppError> {
    let id = parse_greeting_id(&path.into_inner())?;
    let payload = body.into_inner();
    let patch = GreetingPatch {
        sender: payload.sender,
        recipient: payload.recipient,
        message: payload.message,
    };

    let row = with_txn(Some(&req), &app_state, move |txn| {
        Box::pin(
            async move { repo::update_greeting(txn, id, patch).await.map_err(AppError::from) },
        )
    })
    .await?;

    Ok(HttpResponse::Ok().json(GreetingResponse::from(row)))
}

async fn delete_greeting(
    req: HttpRequest,
    app_state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = parse_greeting_id(&path.into_inner())?;

    with_txn(Some(&req), &app_state, move |txn| {
        Box::pin(async move { repo::delete_greeting(txn, id).await.map_err(AppError::from) })
    })
    .await?;

    Ok(HttpResponse::Ok().json(DeleteResponse { success: true }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/greetings")
            .service(
                web::resource("/")
                    .route(web::get().to(list_greetings))
                    .route(web::post().to(create_greeting)),
            )
            .service(
                web::resource("/{greeting_id}")
                    .route(web::get().to(get_greeting))
                    .route(web::patch().to(update_greeting))
                    .route(web::delete().to(delete_greeting)),
            ),
    );
}
