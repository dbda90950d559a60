//! Auth session manager: the single source of truth for "who is signed in"

use crate::auth::session::{Session, SessionStore};
use crate::core::models::Identity;
use crate::providers::identity::{IdentityProvider, ProviderError};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::watch;
use tracing::{debug, info};

/// Errors surfaced to login/logout callers
#[derive(Error, Debug, Clone)]
pub enum AuthError {
    /// Shown inline on the login form; retryable, never fatal
    #[error("invalid email or password")]
    InvalidCredentials,
    /// Transport failure reaching the identity provider
    #[error("network error: {0}")]
    Network(String),
    /// Unexpected provider failure
    #[error("identity provider error: {0}")]
    Provider(String),
}

impl From<ProviderError> for AuthError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::InvalidCredentials => AuthError::InvalidCredentials,
            ProviderError::Network(msg) => AuthError::Network(msg),
            ProviderError::Provider(msg) => AuthError::Provider(msg),
        }
    }
}

/// Orchestrates sign-in and sign-out for one client session and exposes the
/// current session to the rest of the app.
///
/// `login` and `logout` are the only writers of provider-side session state;
/// the session store itself is written exclusively by the provider's change
/// stream. The two completions are independent, so `current_session()` is
/// eventually consistent with a just-finished call, never a synchronous echo
/// of it.
pub struct AuthSessionManager {
    provider: Arc<dyn IdentityProvider>,
    store: SessionStore,
}

impl AuthSessionManager {
    /// Wire a manager to a provider session handle, subscribing the session
    /// store to its change stream.
    pub fn new(provider: Arc<dyn IdentityProvider>) -> Self {
        let store = SessionStore::subscribe(provider.subscribe());
        Self { provider, store }
    }

    /// Forward credentials to the identity provider.
    ///
    /// Success means the session store will *subsequently* observe the new
    /// identity. A credential failure leaves the session untouched. The
    /// returned identity allows an immediate post-login role check; it does
    /// not by itself grant admin access.
    pub async fn login(&self, email: &str, password: &str) -> Result<Identity, AuthError> {
        debug!("login attempt");
        let identity = self.provider.sign_in(email, password).await?;
        info!(uid = %identity.uid, "sign-in accepted");
        Ok(identity)
    }

    /// Invalidate the provider-side session.
    ///
    /// The store will subsequently observe `identity = None`. Logging out an
    /// already-signed-out session succeeds.
    pub async fn logout(&self) -> Result<(), AuthError> {
        self.provider.sign_out().await?;
        info!("sign-out accepted");
        Ok(())
    }

    /// Synchronous read of the latest known session state
    pub fn current_session(&self) -> Session {
        self.store.current()
    }

    /// Watch receiver over session changes, for consumers that must wait on
    /// `loading` before acting.
    pub fn session_changes(&self) -> watch::Receiver<Session> {
        self.store.changes()
    }
}
