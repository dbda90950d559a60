//! Admin console endpoints
//!
//! Every route here sits behind [`AdminGuard`]: the request only reaches a
//! handler once the session is resolved, signed in, and confirmed to carry
//! the admin role for this very request.

use crate::core::models::{PricingPlanDraft, ReviewDraft, ServiceOfferingDraft};
use crate::server::AppState;
use crate::server::middleware::AdminGuard;
use crate::server::routes::{ApiResponse, service_error_response};
use actix_web::{HttpResponse, Result as ActixResult, web};
use serde::Deserialize;

/// Configure the guarded admin routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/admin")
            .wrap(AdminGuard)
            .route("/dashboard", web::get().to(dashboard))
            .route("/pricing-plans", web::get().to(list_pricing_plans))
            .route("/pricing-plans", web::post().to(create_pricing_plan))
            .route("/pricing-plans/{id}", web::put().to(update_pricing_plan))
            .route("/pricing-plans/{id}", web::delete().to(delete_pricing_plan))
            .route("/reviews", web::get().to(list_reviews))
            .route("/reviews", web::post().to(create_review))
            .route("/reviews/{id}", web::put().to(update_review))
            .route("/reviews/{id}", web::delete().to(delete_review))
            .route("/reviews/{id}/visibility", web::put().to(set_review_visibility))
            .route("/services", web::get().to(list_services))
            .route("/services", web::post().to(create_service))
            .route("/services/{id}", web::put().to(update_service))
            .route("/services/{id}", web::delete().to(delete_service))
            .route("/services/{id}/status", web::put().to(set_service_status)),
    );
}

async fn dashboard(state: web::Data<AppState>) -> ActixResult<HttpResponse> {
    match state.content.summary().await {
        Ok(summary) => Ok(HttpResponse::Ok().json(ApiResponse::success(summary))),
        Err(e) => Ok(service_error_response(&e)),
    }
}

// --- Pricing plans ---

async fn list_pricing_plans(state: web::Data<AppState>) -> ActixResult<HttpResponse> {
    match state.content.list_pricing_plans().await {
        Ok(plans) => Ok(HttpResponse::Ok().json(ApiResponse::success(plans))),
        Err(e) => Ok(service_error_response(&e)),
    }
}

async fn create_pricing_plan(
    state: web::Data<AppState>,
    body: web::Json<PricingPlanDraft>,
) -> ActixResult<HttpResponse> {
    match state.content.create_pricing_plan(body.into_inner()).await {
        Ok(plan) => Ok(HttpResponse::Created().json(ApiResponse::success(plan))),
        Err(e) => Ok(service_error_response(&e)),
    }
}

async fn update_pricing_plan(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<PricingPlanDraft>,
) -> ActixResult<HttpResponse> {
    match state
        .content
        .update_pricing_plan(&path, body.into_inner())
        .await
    {
        Ok(plan) => Ok(HttpResponse::Ok().json(ApiResponse::success(plan))),
        Err(e) => Ok(service_error_response(&e)),
    }
}

async fn delete_pricing_plan(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> ActixResult<HttpResponse> {
    match state.content.delete_pricing_plan(&path).await {
        Ok(()) => Ok(HttpResponse::NoContent().finish()),
        Err(e) => Ok(service_error_response(&e)),
    }
}

// --- Reviews ---

/// Visibility toggle payload
#[derive(Debug, Deserialize)]
struct VisibilityRequest {
    is_visible: bool,
}

async fn list_reviews(state: web::Data<AppState>) -> ActixResult<HttpResponse> {
    match state.content.list_reviews(true).await {
        Ok(reviews) => Ok(HttpResponse::Ok().json(ApiResponse::success(reviews))),
        Err(e) => Ok(service_error_response(&e)),
    }
}

async fn create_review(
    state: web::Data<AppState>,
    body: web::Json<ReviewDraft>,
) -> ActixResult<HttpResponse> {
    match state.content.create_review(body.into_inner()).await {
        Ok(review) => Ok(HttpResponse::Created().json(ApiResponse::success(review))),
        Err(e) => Ok(service_error_response(&e)),
    }
}

async fn update_review(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<ReviewDraft>,
) -> ActixResult<HttpResponse> {
    match state.content.update_review(&path, body.into_inner()).await {
        Ok(review) => Ok(HttpResponse::Ok().json(ApiResponse::success(review))),
        Err(e) => Ok(service_error_response(&e)),
    }
}

async fn set_review_visibility(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<VisibilityRequest>,
) -> ActixResult<HttpResponse> {
    match state
        .content
        .set_review_visibility(&path, body.is_visible)
        .await
    {
        Ok(review) => Ok(HttpResponse::Ok().json(ApiResponse::success(review))),
        Err(e) => Ok(service_error_response(&e)),
    }
}

async fn delete_review(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> ActixResult<HttpResponse> {
    match state.content.delete_review(&path).await {
        Ok(()) => Ok(HttpResponse::NoContent().finish()),
        Err(e) => Ok(service_error_response(&e)),
    }
}

// --- Service listings ---

/// Active-status toggle payload
#[derive(Debug, Deserialize)]
struct StatusRequest {
    is_active: bool,
}

async fn list_services(state: web::Data<AppState>) -> ActixResult<HttpResponse> {
    match state.content.list_services(true).await {
        Ok(services) => Ok(HttpResponse::Ok().json(ApiResponse::success(services))),
        Err(e) => Ok(service_error_response(&e)),
    }
}

async fn create_service(
    state: web::Data<AppState>,
    body: web::Json<ServiceOfferingDraft>,
) -> ActixResult<HttpResponse> {
    match state.content.create_service(body.into_inner()).await {
        Ok(service) => Ok(HttpResponse::Created().json(ApiResponse::success(service))),
        Err(e) => Ok(service_error_response(&e)),
    }
}

async fn update_service(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<ServiceOfferingDraft>,
) -> ActixResult<HttpResponse> {
    match state.content.update_service(&path, body.into_inner()).await {
        Ok(service) => Ok(HttpResponse::Ok().json(ApiResponse::success(service))),
        Err(e) => Ok(service_error_response(&e)),
    }
}

async fn set_service_status(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<StatusRequest>,
) -> ActixResult<HttpResponse> {
    match state.content.set_service_status(&path, body.is_active).await {
        Ok(service) => Ok(HttpResponse::Ok().json(ApiResponse::success(service))),
        Err(e) => Ok(service_error_response(&e)),
    }
}

async fn delete_service(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> ActixResult<HttpResponse> {
    match state.content.delete_service(&path).await {
        Ok(()) => Ok(HttpResponse::NoContent().finish()),
        Err(e) => Ok(service_error_response(&e)),
    }
}
