//! Actix-web handlers.

use actix_web::HttpResponse;
use actix_web::http::StatusCode;

use crate::dto::api::ErrorResponse;

pub mod api;

/// Builds a JSON `{"error": ...}` response with the given status.
pub fn json_error(status: StatusCode, message: impl Into<String>) -> HttpResponse {
    HttpResponse::build(status).json(ErrorResponse::new(message))
}
