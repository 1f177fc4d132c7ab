pub mod employee;

use actix_web::error::JsonPayloadError;
use actix_web::HttpRequest;

use crate::errors::AppError;

/// Turns body decoding failures into the JSON envelope instead of actix's
/// plain-text default.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    log::warn!("rejected request body: {}", err);
    AppError::BadRequest("invalid JSON".to_string()).into()
}
