use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use std::fmt;

use crate::models::response::{ApiResponse, FieldViolation};
use crate::repositories::StoreError;

#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    Validation(Vec<FieldViolation>),
    NotFound(String),
    DatabaseError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::BadRequest(msg) => write!(f, "Bad Request: {}", msg),
            AppError::Validation(errors) => write!(f, "Validation failed on {} field(s)", errors.len()),
            AppError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            AppError::DatabaseError(msg) => write!(f, "Database Error: {}", msg),
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { id } => {
                log::warn!("employee {} not found", id);
                AppError::NotFound("employee not found".to_string())
            }
            StoreError::Database(err) => {
                log::error!("Database error: {:?}", err);
                AppError::DatabaseError(format!("internal server error: {}", err))
            }
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            AppError::Validation(errors) => ApiResponse::with_errors("error validation!", errors.clone()),
            AppError::BadRequest(msg) | AppError::NotFound(msg) | AppError::DatabaseError(msg) => {
                ApiResponse::message(msg.clone())
            }
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}
