//! HTTP server core implementation

use crate::auth::{RoleResolver, SessionRegistry};
use crate::config::{Config, ServerConfig};
use crate::providers::docstore::{AuthorizationStore, DocumentStore, RestDocumentStore};
use crate::providers::identity::{IdentityBackend, RestIdentityBackend};
use crate::server::middleware::{LoginRateLimiter, RequestIdMiddleware};
use crate::server::routes;
use crate::server::state::AppState;
use crate::services::ContentService;
use crate::utils::error::{AppError, Result};
use actix_cors::Cors;
use actix_web::middleware::DefaultHeaders;
use actix_web::{App, HttpServer as ActixHttpServer, web};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_actix_web::TracingLogger;

/// HTTP server
pub struct HttpServer {
    config: ServerConfig,
    state: AppState,
}

impl HttpServer {
    /// Wire the external clients and build the shared application state
    pub async fn new(config: &Config) -> Result<Self> {
        info!("Creating HTTP server");

        let identity: Arc<dyn IdentityBackend> =
            Arc::new(RestIdentityBackend::new(&config.identity)?);
        let docstore = Arc::new(RestDocumentStore::new(&config.store)?);

        let sessions = Arc::new(SessionRegistry::new(
            identity,
            Duration::from_secs(config.auth.session_ttl_secs),
        ));
        let resolver = Arc::new(RoleResolver::new(
            Arc::clone(&docstore) as Arc<dyn AuthorizationStore>,
            Duration::from_secs(config.auth.role_check_timeout_secs),
        ));
        let content = Arc::new(ContentService::new(docstore as Arc<dyn DocumentStore>));
        let login_limiter = Arc::new(LoginRateLimiter::new(&config.auth));

        let state = AppState::new(config.clone(), sessions, resolver, content, login_limiter);

        Ok(Self {
            config: config.server.clone(),
            state,
        })
    }

    /// Create the Actix-web application
    fn create_app(
        state: web::Data<AppState>,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        let server_config = &state.config.server;

        let mut cors = Cors::default()
            .allowed_methods(vec!["GET", "POST", "PUT", "DELETE"])
            .allow_any_header()
            .max_age(3600);
        if server_config.cors_origins.is_empty() {
            cors = cors.allow_any_origin();
        } else {
            for origin in &server_config.cors_origins {
                cors = cors.allowed_origin(origin);
            }
        }

        let static_dir = server_config
            .static_dir
            .clone()
            .filter(|dir| Path::new(dir).is_dir());

        let mut app = App::new()
            .app_data(state)
            .wrap(cors)
            .wrap(TracingLogger::default())
            .wrap(RequestIdMiddleware)
            .wrap(DefaultHeaders::new().add(("Server", "scribegate")))
            .configure(routes::health::configure_routes)
            .configure(routes::auth::configure_routes)
            .configure(routes::content::configure_routes)
            .configure(routes::admin::configure_routes);

        // The marketing site itself is static; everything dynamic goes
        // through the API scopes above.
        if let Some(dir) = static_dir {
            app = app.service(actix_files::Files::new("/", dir).index_file("index.html"));
        }

        app
    }

    /// Start the HTTP server
    pub async fn start(self) -> Result<()> {
        let bind_addr = format!("{}:{}", self.config.host, self.config.port);
        info!("Starting HTTP server on {}", bind_addr);

        if self
            .config
            .static_dir
            .as_deref()
            .is_some_and(|dir| !Path::new(dir).is_dir())
        {
            warn!(
                dir = self.config.static_dir.as_deref().unwrap_or_default(),
                "static site directory not found; the mount is disabled"
            );
        }

        let state = web::Data::new(self.state);
        let server = ActixHttpServer::new(move || Self::create_app(state.clone()))
            .bind(&bind_addr)
            .map_err(|e| AppError::server(format!("failed to bind {bind_addr}: {e}")))?
            .run();

        info!("HTTP server listening on {}", bind_addr);

        server
            .await
            .map_err(|e| AppError::server(format!("server error: {e}")))?;

        info!("HTTP server stopped");
        Ok(())
    }

    /// Application state (exposed for tests)
    pub fn state(&self) -> &AppState {
        &self.state
    }
}
