//! External identity provider interface
//!
//! Models the provider the way its client SDKs behave: one handle per client
//! session, carrying an auth-state change stream plus discrete sign-in and
//! sign-out calls. Sign-in completing and the change stream delivering the
//! new identity are two independent asynchronous completions of the same
//! provider action; consumers must not assume an ordering between them.

mod rest;

pub use rest::{RestIdentityBackend, RestIdentityProvider};

use crate::core::models::Identity;
use async_trait::async_trait;
use futures::stream::BoxStream;
use std::sync::Arc;
use thiserror::Error;

/// Auth-state change stream for one client session.
///
/// Emits the current identity (or `None` when signed out) on every change.
pub type SessionEvents = BoxStream<'static, Option<Identity>>;

/// Errors surfaced by the identity provider
#[derive(Error, Debug, Clone)]
pub enum ProviderError {
    /// The credentials were rejected; retryable by the user, never fatal
    #[error("invalid email or password")]
    InvalidCredentials,
    /// Transport-level failure reaching the provider
    #[error("network error: {0}")]
    Network(String),
    /// The provider answered with an unexpected failure
    #[error("identity provider error: {0}")]
    Provider(String),
}

/// One client session's handle to the external identity provider
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Register for auth-state changes.
    ///
    /// The stream yields the provider's view of the signed-in identity; the
    /// first event may arrive at any time (including never, if the provider
    /// stays silent). Dropping the stream unsubscribes.
    fn subscribe(&self) -> SessionEvents;

    /// Verify credentials and establish a provider-side session.
    ///
    /// On success the change stream will subsequently deliver the identity.
    async fn sign_in(&self, email: &str, password: &str) -> Result<Identity, ProviderError>;

    /// Invalidate the provider-side session.
    ///
    /// The change stream will subsequently deliver `None`. Signing out an
    /// already-signed-out session is not an error.
    async fn sign_out(&self) -> Result<(), ProviderError>;
}

/// Hands out per-client-session provider handles sharing one backend
/// connection.
pub trait IdentityBackend: Send + Sync {
    /// Open a fresh provider session handle
    fn open_session(&self) -> Arc<dyn IdentityProvider>;
}
