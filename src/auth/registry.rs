//! Server-side session registry
//!
//! Maps opaque bearer tokens to live client sessions. The browser held this
//! state implicitly in the original console; server-side it needs explicit
//! bookkeeping with a TTL so abandoned sessions cannot linger.

use crate::auth::manager::{AuthError, AuthSessionManager};
use crate::core::models::Identity;
use crate::providers::identity::IdentityBackend;
use base64::Engine;
use dashmap::DashMap;
use rand::RngCore;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// One authenticated client's server-side session
pub struct ClientSession {
    token: String,
    manager: AuthSessionManager,
    issued_at: Instant,
    expires_at: Instant,
}

impl ClientSession {
    /// Opaque bearer token addressing this session
    pub fn token(&self) -> &str {
        &self.token
    }

    /// The session's auth manager
    pub fn manager(&self) -> &AuthSessionManager {
        &self.manager
    }

    /// When the session was issued
    pub fn issued_at(&self) -> Instant {
        self.issued_at
    }

    /// Whether the TTL has elapsed
    pub fn expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// Token-keyed registry of client sessions
pub struct SessionRegistry {
    backend: Arc<dyn IdentityBackend>,
    sessions: DashMap<String, Arc<ClientSession>>,
    ttl: Duration,
}

impl SessionRegistry {
    /// Create a registry over the given identity backend
    pub fn new(backend: Arc<dyn IdentityBackend>, ttl: Duration) -> Self {
        Self {
            backend,
            sessions: DashMap::new(),
            ttl,
        }
    }

    /// Open a provider session, verify credentials, and issue a token.
    ///
    /// A credential failure leaves no registry entry behind.
    pub async fn login(
        &self,
        email: &str,
        password: &str,
    ) -> Result<(Arc<ClientSession>, Identity), AuthError> {
        let provider = self.backend.open_session();
        let manager = AuthSessionManager::new(provider);
        let identity = manager.login(email, password).await?;

        let token = generate_token();
        let now = Instant::now();
        let session = Arc::new(ClientSession {
            token: token.clone(),
            manager,
            issued_at: now,
            expires_at: now + self.ttl,
        });
        self.sessions.insert(token, Arc::clone(&session));

        info!(uid = %identity.uid, sessions = self.sessions.len(), "client session issued");
        Ok((session, identity))
    }

    /// Look up a live session by token; expired entries are pruned on access
    pub fn session(&self, token: &str) -> Option<Arc<ClientSession>> {
        let session = self.sessions.get(token)?.clone();
        if session.expired() {
            debug!("client session expired");
            self.sessions.remove(token);
            return None;
        }
        Some(session)
    }

    /// Sign the session out with the provider and drop it.
    ///
    /// Unknown tokens succeed: the session is gone either way.
    pub async fn logout(&self, token: &str) -> Result<(), AuthError> {
        let Some((_, session)) = self.sessions.remove(token) else {
            return Ok(());
        };
        session.manager.logout().await
    }

    /// Drop a session without a provider round-trip (the provider side is
    /// already signed out, e.g. after a fail-closed denial).
    pub fn discard(&self, token: &str) {
        self.sessions.remove(token);
    }

    /// Drop every expired entry, returning how many were removed
    pub fn prune_expired(&self) -> usize {
        let before = self.sessions.len();
        self.sessions.retain(|_, session| !session.expired());
        before - self.sessions.len()
    }

    /// Number of live entries (expired-but-unpruned included)
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Whether the registry holds no sessions
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

/// 256-bit random token, base64url without padding
fn generate_token() -> String {
    let mut buf = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut buf);
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buf)
}
