use actix_web::HttpResponse;

use crate::dto::api::ErrorResponse;
use crate::services::ServiceError;

pub mod api;

/// Maps a service failure onto the JSON error response sent to clients.
pub fn error_response(err: &ServiceError) -> HttpResponse {
    let body = ErrorResponse::from(err);
    match err {
        ServiceError::Form(_) => HttpResponse::BadRequest().json(body),
        ServiceError::Repository(_) => HttpResponse::InternalServerError().json(body),
    }
}
