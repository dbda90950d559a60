//! Admin gate middleware
//!
//! Runs both access gates, in order, on every request under the admin scope:
//! the authentication-boundary route guard first, then the role-aware access
//! controller. Neither result is cached between requests, so a role revoked
//! mid-session is caught on the next admin call.

use crate::auth::{AccessDenial, AccessOutcome, AdminAccessController, GuardState};
use crate::core::models::Identity;
use crate::server::AppState;
use crate::server::middleware::helpers::extract_session_token;
use crate::server::routes::ApiResponse;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready};
use actix_web::http::StatusCode;
use actix_web::{HttpMessage, HttpRequest, HttpResponse, ResponseError, web};
use futures::future::{Ready, ready};
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use thiserror::Error;
use tracing::debug;

/// The admin identity attached to a request that passed both gates
#[derive(Debug, Clone)]
pub struct AdminIdentity(pub Identity);

/// Gate refusals, rendered as the API error envelope.
///
/// The redirect metadata carries `replace: true` so the console replaces the
/// history entry instead of pushing one; back-navigation must not re-enter
/// the guarded route.
#[derive(Debug, Error)]
enum GateError {
    /// Session still resolving: neutral placeholder, no redirect
    #[error("Session is still resolving; retry shortly")]
    Pending,
    /// Signed out (or no session at all): redirect to login
    #[error("Authentication required")]
    NotSignedIn { redirect: String },
    /// Signed in but rejected by the role check
    #[error("{notice}")]
    Denied { notice: String, redirect: String },
}

impl ResponseError for GateError {
    fn status_code(&self) -> StatusCode {
        match self {
            GateError::Pending => StatusCode::SERVICE_UNAVAILABLE,
            GateError::NotSignedIn { .. } => StatusCode::UNAUTHORIZED,
            GateError::Denied { .. } => StatusCode::FORBIDDEN,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let meta = match self {
            GateError::Pending => serde_json::json!({ "retry": true }),
            GateError::NotSignedIn { redirect } | GateError::Denied { redirect, .. } => {
                serde_json::json!({ "redirect": redirect, "replace": true })
            }
        };
        HttpResponse::build(self.status_code())
            .json(ApiResponse::<()>::error_with_meta(self.to_string(), meta))
    }
}

/// Admin gate for Actix-web
pub struct AdminGuard;

impl<S, B> Transform<S, ServiceRequest> for AdminGuard
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = AdminGuardService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AdminGuardService {
            service: Rc::new(service),
        }))
    }
}

/// Service implementation for the admin gate
pub struct AdminGuardService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for AdminGuardService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = actix_web::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            let state = req
                .app_data::<web::Data<AppState>>()
                .cloned()
                .ok_or_else(|| {
                    actix_web::error::ErrorInternalServerError("application state missing")
                })?;
            let login_route = state.config.auth.login_route.clone();

            let Some(token) = extract_session_token(req.headers()) else {
                return Err(GateError::NotSignedIn {
                    redirect: login_route,
                }
                .into());
            };
            let Some(session) = state.sessions.session(&token) else {
                return Err(GateError::NotSignedIn {
                    redirect: login_route,
                }
                .into());
            };

            // Gate one: the authentication boundary, independent of role.
            match GuardState::evaluate(&session.manager().current_session()) {
                GuardState::Pending => return Err(GateError::Pending.into()),
                GuardState::Denied => {
                    return Err(GateError::NotSignedIn {
                        redirect: login_route,
                    }
                    .into());
                }
                GuardState::Allowed => {}
            }

            // Gate two: the role-aware check, fresh on every request.
            let mut controller = AdminAccessController::new(
                session.manager(),
                &state.resolver,
                state.config.auth.admin_login_route.clone(),
            );
            match controller.authorize().await {
                AccessOutcome::Granted { identity } => {
                    debug!(uid = %identity.uid, "admin request authorized");
                    req.extensions_mut().insert(AdminIdentity(identity));
                    service.call(req).await
                }
                AccessOutcome::Denied(AccessDenial { notice, redirect }) => {
                    // The controller already signed the provider session out;
                    // drop our token so the client cannot retry with it.
                    state.sessions.discard(&token);
                    match notice {
                        Some(notice) => Err(GateError::Denied { notice, redirect }.into()),
                        None => Err(GateError::NotSignedIn { redirect }.into()),
                    }
                }
            }
        })
    }
}

/// Fetch the admin identity attached by the gate
pub fn admin_identity(req: &HttpRequest) -> Result<Identity, actix_web::Error> {
    req.extensions()
        .get::<AdminIdentity>()
        .map(|admin| admin.0.clone())
        .ok_or_else(|| actix_web::error::ErrorInternalServerError("admin identity missing"))
}
