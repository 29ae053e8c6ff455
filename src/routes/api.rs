use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, Responder, get, web};
use serde_json::json;

use crate::dto::api::CustomersResponse;
use crate::query::{RawQuery, ValidationError};
use crate::repository::CustomerReader;
use crate::routes::json_error;
use crate::services::{ServiceError, customers as customers_service};

#[get("/customers")]
/// List customers with pagination and optional `size`/`industry` filters.
pub async fn list_customers(
    req: HttpRequest,
    repo: web::Data<dyn CustomerReader>,
) -> impl Responder {
    // Decoded by hand so repeated keys stay visible to validation.
    let raw = match web::Query::<Vec<(String, String)>>::from_query(req.query_string()) {
        Ok(pairs) => RawQuery::new(pairs.into_inner()),
        Err(err) => {
            let err = ValidationError::Malformed(err.to_string());
            log::debug!("Rejected customer listing query: {err}");
            return json_error(StatusCode::BAD_REQUEST, err.to_string());
        }
    };

    match customers_service::list_customers(repo.get_ref(), &raw) {
        Ok(page) => HttpResponse::Ok().json(CustomersResponse::from(page)),
        Err(ServiceError::Validation(err)) => json_error(StatusCode::BAD_REQUEST, err.to_string()),
        // Repository failures are logged by the service.
        Err(ServiceError::Repository(_)) => json_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "customers are temporarily unavailable",
        ),
    }
}

#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(json!({ "status": "ok" }))
}
