//! Shared test infrastructure

pub mod fixtures;
pub mod stores;

use scribegate::Config;
use scribegate::auth::{RoleResolver, SessionRegistry};
use scribegate::providers::docstore::AuthorizationStore;
use scribegate::server::AppState;
use scribegate::server::middleware::LoginRateLimiter;
use scribegate::services::ContentService;
use std::sync::Arc;
use std::time::Duration;
use self::stores::{InMemoryDocumentStore, ScriptedIdentityBackend};
use actix_web::body::{BoxBody, MessageBody};
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{Error, HttpResponse, test};

/// Drive a request through the app the way the real HTTP server does.
///
/// `test::call_service` operates below the HTTP dispatcher and simply unwraps
/// any `Err` a middleware returns. The production dispatcher instead renders
/// that error through `ResponseError::error_response`. This helper reproduces
/// that final step so middleware-originated responses (e.g. the admin gate's
/// refusals) are observable as the `ServiceResponse` the caller expects.
pub async fn dispatch<S, R, B>(app: &S, req: R) -> ServiceResponse<BoxBody>
where
    S: Service<R, Response = ServiceResponse<B>, Error = Error>,
    B: MessageBody + 'static,
{
    match test::try_call_service(app, req).await {
        Ok(res) => res.map_into_boxed_body(),
        Err(err) => {
            let resp = HttpResponse::from_error(err);
            test::TestRequest::default().to_srv_request().into_response(resp)
        }
    }
}

/// Build an application state over the scripted test doubles
pub fn test_state(
    backend: Arc<ScriptedIdentityBackend>,
    store: Arc<InMemoryDocumentStore>,
) -> AppState {
    let config = Config::default();
    let sessions = Arc::new(SessionRegistry::new(
        backend,
        Duration::from_secs(config.auth.session_ttl_secs),
    ));
    let resolver = Arc::new(RoleResolver::new(
        Arc::clone(&store) as Arc<dyn AuthorizationStore>,
        Duration::from_secs(config.auth.role_check_timeout_secs),
    ));
    let content = Arc::new(ContentService::new(store));
    let login_limiter = Arc::new(LoginRateLimiter::new(&config.auth));
    AppState::new(config, sessions, resolver, content, login_limiter)
}

/// Let spawned forwarding tasks drain their queues
pub async fn settle() {
    for _ in 0..10 {
        tokio::task::yield_now().await;
    }
}
