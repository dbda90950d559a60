//! Public content endpoints
//!
//! Read-only views for the marketing site: hidden reviews and retired
//! services never appear here.

use crate::server::AppState;
use crate::server::routes::{ApiResponse, service_error_response};
use actix_web::{HttpResponse, Result as ActixResult, web};

/// Configure public content routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/content")
            .route("/pricing-plans", web::get().to(list_pricing_plans))
            .route("/reviews", web::get().to(list_reviews))
            .route("/services", web::get().to(list_services)),
    );
}

async fn list_pricing_plans(state: web::Data<AppState>) -> ActixResult<HttpResponse> {
    match state.content.list_pricing_plans().await {
        Ok(plans) => Ok(HttpResponse::Ok().json(ApiResponse::success(plans))),
        Err(e) => Ok(service_error_response(&e)),
    }
}

async fn list_reviews(state: web::Data<AppState>) -> ActixResult<HttpResponse> {
    match state.content.list_reviews(false).await {
        Ok(reviews) => Ok(HttpResponse::Ok().json(ApiResponse::success(reviews))),
        Err(e) => Ok(service_error_response(&e)),
    }
}

async fn list_services(state: web::Data<AppState>) -> ActixResult<HttpResponse> {
    match state.content.list_services(false).await {
        Ok(services) => Ok(HttpResponse::Ok().json(ApiResponse::success(services))),
        Err(e) => Ok(service_error_response(&e)),
    }
}
