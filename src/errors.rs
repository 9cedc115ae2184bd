use actix_web::error::{InternalError, JsonPayloadError, QueryPayloadError};
use actix_web::{HttpRequest, HttpResponse};
use serde_json::json;
use thiserror::Error;

use crate::domain::errors::DomainError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Unprocessable(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::EmptyOrder => AppError::BadRequest(e.to_string()),
            DomainError::InvalidInput(msg) => AppError::Unprocessable(msg),
            DomainError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::BadRequest(msg) => HttpResponse::BadRequest().json(json!({ "detail": msg })),
            AppError::Unprocessable(msg) => {
                HttpResponse::UnprocessableEntity().json(json!({ "detail": msg }))
            }
            AppError::Internal(msg) => {
                log::error!("Request failed: {}", msg);
                HttpResponse::InternalServerError().json(json!({
                    "detail": "Internal server error"
                }))
            }
        }
    }
}

/// Body errors: schema violations are 422, unreadable payloads 400.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let detail = err.to_string();
    let response = if matches!(err, JsonPayloadError::Deserialize(_)) {
        HttpResponse::UnprocessableEntity().json(json!({ "detail": detail }))
    } else {
        HttpResponse::BadRequest().json(json!({ "detail": detail }))
    };
    InternalError::from_response(err, response).into()
}

pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let response = HttpResponse::UnprocessableEntity().json(json!({ "detail": err.to_string() }));
    InternalError::from_response(err, response).into()
}
