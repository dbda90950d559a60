//! Authentication endpoints

use crate::auth::AuthError;
use crate::core::models::Identity;
use crate::server::AppState;
use crate::server::middleware::{client_ip, extract_session_token};
use crate::server::routes::ApiResponse;
use crate::utils::validation::Validator;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

/// Configure authentication routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/auth")
            .route("/login", web::post().to(login))
            .route("/logout", web::post().to(logout))
            .route("/session", web::get().to(current_session)),
    );
}

/// Login request
#[derive(Debug, Deserialize)]
struct LoginRequest {
    email: String,
    password: String,
}

/// Signed-in principal, without provider internals
#[derive(Debug, Serialize)]
struct UserInfo {
    uid: String,
    email: String,
}

impl From<Identity> for UserInfo {
    fn from(identity: Identity) -> Self {
        Self {
            uid: identity.uid,
            email: identity.email,
        }
    }
}

/// Login response
#[derive(Debug, Serialize)]
struct LoginResponse {
    token: String,
    user: UserInfo,
}

/// Current session state for the console
#[derive(Debug, Serialize)]
struct SessionResponse {
    user: Option<UserInfo>,
    loading: bool,
}

/// Verify credentials and issue a session token.
///
/// Credential failures come back inline (401) for the login form; they never
/// redirect. Provider outages surface as a generic failure.
async fn login(
    state: web::Data<AppState>,
    req: HttpRequest,
    body: web::Json<LoginRequest>,
) -> ActixResult<HttpResponse> {
    let email = body.email.trim();
    let password = body.password.trim();

    if let Err(e) = Validator::validate_email(email) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::<()>::error(e.to_string())));
    }

    let client = client_ip(&req);
    if let Err(wait_secs) = state.login_limiter.check_allowed(&client) {
        return Ok(HttpResponse::TooManyRequests().json(ApiResponse::<()>::error(format!(
            "Too many failed attempts. Try again in {wait_secs} seconds"
        ))));
    }

    match state.sessions.login(email, password).await {
        Ok((session, identity)) => {
            state.login_limiter.record_success(&client);
            info!(uid = %identity.uid, "login succeeded");
            Ok(HttpResponse::Ok().json(ApiResponse::success(LoginResponse {
                token: session.token().to_string(),
                user: identity.into(),
            })))
        }
        Err(AuthError::InvalidCredentials) => {
            state.login_limiter.record_failure(&client);
            warn!("login rejected: invalid credentials");
            Ok(HttpResponse::Unauthorized().json(ApiResponse::<()>::error(
                "Invalid email or password".to_string(),
            )))
        }
        Err(e) => {
            error!(error = %e, "login failed upstream");
            Ok(HttpResponse::BadGateway().json(ApiResponse::<()>::error(
                "Sign-in is temporarily unavailable".to_string(),
            )))
        }
    }
}

/// Invalidate the current session.
///
/// Always succeeds from the client's point of view: an unknown token means
/// the session is already gone.
async fn logout(state: web::Data<AppState>, req: HttpRequest) -> ActixResult<HttpResponse> {
    if let Some(token) = extract_session_token(req.headers()) {
        if let Err(e) = state.sessions.logout(&token).await {
            // The registry entry is gone either way; the provider-side
            // failure is logged, not surfaced.
            warn!(error = %e, "provider sign-out failed during logout");
        }
    }
    Ok(HttpResponse::Ok().json(ApiResponse::success(serde_json::json!({ "signed_out": true }))))
}

/// Report the current session state (who is signed in, or that the change
/// stream has not resolved yet).
async fn current_session(state: web::Data<AppState>, req: HttpRequest) -> ActixResult<HttpResponse> {
    let response = extract_session_token(req.headers())
        .and_then(|token| state.sessions.session(&token))
        .map(|session| {
            let current = session.manager().current_session();
            SessionResponse {
                user: current.identity.map(UserInfo::from),
                loading: current.loading,
            }
        })
        .unwrap_or(SessionResponse {
            user: None,
            loading: false,
        });

    Ok(HttpResponse::Ok().json(ApiResponse::success(response)))
}
