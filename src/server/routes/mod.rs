//! HTTP route modules

pub mod admin;
pub mod auth;
pub mod content;
pub mod health;

use crate::providers::docstore::StoreError;
use crate::utils::error::AppError;
use actix_web::HttpResponse;
use tracing::error;

/// Standard API response envelope
#[derive(Debug, Clone, serde::Serialize)]
pub struct ApiResponse<T> {
    /// Whether the request was successful
    pub success: bool,
    /// Response data (if successful)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Error message (if failed)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Additional metadata
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<serde_json::Value>,
}

impl<T> ApiResponse<T>
where
    T: serde::Serialize,
{
    /// Create a successful response
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            meta: None,
        }
    }
}

impl<T> ApiResponse<T> {
    /// Create an error response
    pub fn error(message: String) -> ApiResponse<T> {
        ApiResponse {
            success: false,
            data: None,
            error: Some(message),
            meta: None,
        }
    }

    /// Create an error response with metadata
    pub fn error_with_meta(message: String, meta: serde_json::Value) -> ApiResponse<T> {
        ApiResponse {
            success: false,
            data: None,
            error: Some(message),
            meta: Some(meta),
        }
    }
}

/// Map a service error to an HTTP response.
///
/// Backend failures are reported generically; the details stay in the log.
pub(crate) fn service_error_response(err: &AppError) -> HttpResponse {
    match err {
        AppError::Validation(message) => {
            HttpResponse::BadRequest().json(ApiResponse::<()>::error(message.clone()))
        }
        AppError::NotFound(message) => {
            HttpResponse::NotFound().json(ApiResponse::<()>::error(message.clone()))
        }
        AppError::Store(StoreError::NotFound { .. }) => {
            HttpResponse::NotFound().json(ApiResponse::<()>::error("Not found".to_string()))
        }
        other => {
            error!(error = %other, "content request failed");
            HttpResponse::BadGateway()
                .json(ApiResponse::<()>::error("Content store unavailable".to_string()))
        }
    }
}
