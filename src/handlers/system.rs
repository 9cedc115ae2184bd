use actix_web::{web, HttpResponse};
use serde::Serialize;
use utoipa::ToSchema;

use crate::application::diagnostics::{DiagnosticsReport, EnvStatus};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct StatusMessage {
    pub message: String,
}

/// Collection name to record type, for database viewers.
#[derive(Debug, Serialize, ToSchema)]
pub struct SchemaMap {
    pub user: String,
    pub product: String,
    pub order: String,
}

#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Service is up", body = StatusMessage)),
    tag = "system"
)]
pub async fn read_root() -> HttpResponse {
    HttpResponse::Ok().json(StatusMessage {
        message: "Chips Commerce Backend Running".to_string(),
    })
}

#[utoipa::path(
    get,
    path = "/schema",
    responses((status = 200, description = "Record types per collection", body = SchemaMap)),
    tag = "system"
)]
pub async fn get_schema() -> HttpResponse {
    HttpResponse::Ok().json(SchemaMap {
        user: "User".to_string(),
        product: "Product".to_string(),
        order: "Order".to_string(),
    })
}

/// GET /test
///
/// Reports store connectivity and whether the store environment variables
/// are set. Store failures are reported in the body, never as an error status.
#[utoipa::path(
    get,
    path = "/test",
    responses((status = 200, description = "Diagnostic report", body = DiagnosticsReport)),
    tag = "system"
)]
pub async fn test_database(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let diagnostics = state.diagnostics.clone();

    let report = web::block(move || diagnostics.report(EnvStatus::from_env()))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(HttpResponse::Ok().json(report))
}
