//! Application state shared across HTTP handlers

use crate::auth::{RoleResolver, SessionRegistry};
use crate::config::Config;
use crate::server::middleware::LoginRateLimiter;
use crate::services::ContentService;
use std::sync::Arc;

/// Shared resources for the request handlers, all behind `Arc` so the state
/// clones cheaply per worker.
#[derive(Clone)]
pub struct AppState {
    /// Backend configuration (read-only)
    pub config: Arc<Config>,
    /// Token-keyed client sessions
    pub sessions: Arc<SessionRegistry>,
    /// Role lookup for the admin gate
    pub resolver: Arc<RoleResolver>,
    /// Content listing and CRUD
    pub content: Arc<ContentService>,
    /// Brute-force protection for the login endpoint
    pub login_limiter: Arc<LoginRateLimiter>,
}

impl AppState {
    /// Assemble the state from its parts
    pub fn new(
        config: Config,
        sessions: Arc<SessionRegistry>,
        resolver: Arc<RoleResolver>,
        content: Arc<ContentService>,
        login_limiter: Arc<LoginRateLimiter>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            sessions,
            resolver,
            content,
            login_limiter,
        }
    }
}
