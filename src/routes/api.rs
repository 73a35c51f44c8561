use actix_web::{HttpRequest, HttpResponse, Responder, get, web};

use crate::forms::listing::ListingRequest;
use crate::models::config::ServerConfig;
use crate::repository::InMemoryCatalog;
use crate::routes::error_response;
use crate::services::{ServiceError, listing};

fn parse_request(req: &HttpRequest) -> Result<ListingRequest, ServiceError> {
    Ok(ListingRequest::from_query(req.query_string())?)
}

#[get("/v1/tasks")]
pub async fn api_v1_tasks(
    req: HttpRequest,
    catalog: web::Data<InMemoryCatalog>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    let result = parse_request(&req).and_then(|request| {
        listing::list_tasks(catalog.get_ref(), request, server_config.items_per_page)
    });

    match result {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(err) => error_response(&err),
    }
}

#[get("/v1/humans")]
pub async fn api_v1_humans(
    req: HttpRequest,
    catalog: web::Data<InMemoryCatalog>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    let result = parse_request(&req).and_then(|request| {
        listing::list_humans(catalog.get_ref(), request, server_config.items_per_page)
    });

    match result {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(err) => error_response(&err),
    }
}

/// Registers the listing endpoints; mounted under `/api` by [`crate::run`].
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(api_v1_tasks).service(api_v1_humans);
}
