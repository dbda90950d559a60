//! Health and version endpoints

use crate::server::routes::ApiResponse;
use actix_web::{HttpResponse, Result as ActixResult, web};
use std::borrow::Cow;

/// Configure health routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/version", web::get().to(version_info));
}

/// Health status payload
#[derive(Debug, serde::Serialize)]
struct HealthStatus {
    status: Cow<'static, str>,
    timestamp: chrono::DateTime<chrono::Utc>,
    version: Cow<'static, str>,
}

/// Basic liveness probe for load balancers and monitoring
async fn health_check() -> ActixResult<HttpResponse> {
    let health_status = HealthStatus {
        status: Cow::Borrowed("healthy"),
        timestamp: chrono::Utc::now(),
        version: Cow::Borrowed(env!("CARGO_PKG_VERSION")),
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(health_status)))
}

/// Build identification
async fn version_info() -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(ApiResponse::success(serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))))
}
