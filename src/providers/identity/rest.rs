//! REST client for the hosted identity provider

use super::{IdentityBackend, IdentityProvider, ProviderError, SessionEvents};
use crate::config::IdentityConfig;
use crate::core::models::Identity;
use crate::utils::error::AppError;
use async_trait::async_trait;
use futures::StreamExt;
use parking_lot::Mutex;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio_stream::wrappers::UnboundedReceiverStream;
use tracing::{debug, warn};

/// Shared connection to the identity provider's REST API
pub struct RestIdentityBackend {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl RestIdentityBackend {
    /// Build the backend from configuration
    pub fn new(config: &IdentityConfig) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::config(format!("identity client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }
}

impl IdentityBackend for RestIdentityBackend {
    fn open_session(&self) -> Arc<dyn IdentityProvider> {
        Arc::new(RestIdentityProvider {
            client: self.client.clone(),
            base_url: self.base_url.clone(),
            api_key: self.api_key.clone(),
            state: Mutex::new(SessionState::default()),
        })
    }
}

#[derive(Default)]
struct SessionState {
    current: Option<Identity>,
    subscribers: Vec<mpsc::UnboundedSender<Option<Identity>>>,
}

/// One client session against the identity provider's REST API
pub struct RestIdentityProvider {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    state: Mutex<SessionState>,
}

impl RestIdentityProvider {
    /// Push an auth-state change to every live subscriber and remember it as
    /// the current state for late subscribers.
    fn emit(&self, identity: Option<Identity>) {
        let mut state = self.state.lock();
        state.current = identity.clone();
        state
            .subscribers
            .retain(|tx| tx.send(identity.clone()).is_ok());
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SignInResponse {
    uid: String,
    email: String,
    #[serde(default)]
    id_token: Option<String>,
}

#[async_trait]
impl IdentityProvider for RestIdentityProvider {
    fn subscribe(&self) -> SessionEvents {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut state = self.state.lock();
        // Late subscribers start from the current provider view.
        let _ = tx.send(state.current.clone());
        state.subscribers.push(tx);
        UnboundedReceiverStream::new(rx).boxed()
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<Identity, ProviderError> {
        debug!("identity sign-in request");

        let response = self
            .client
            .post(self.endpoint("/v1/accounts:signIn"))
            .header("x-api-key", &self.api_key)
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        let status = response.status();
        if status.is_client_error() {
            // The provider reports every credential problem in the 4xx class;
            // details stay out of the error to avoid account enumeration.
            return Err(ProviderError::InvalidCredentials);
        }
        if !status.is_success() {
            return Err(ProviderError::Provider(format!(
                "sign-in failed with status {status}"
            )));
        }

        let body: SignInResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Provider(format!("malformed sign-in response: {e}")))?;

        let identity = Identity {
            uid: body.uid,
            email: body.email,
            token: body.id_token,
        };
        self.emit(Some(identity.clone()));
        Ok(identity)
    }

    async fn sign_out(&self) -> Result<(), ProviderError> {
        let token = self.state.lock().current.as_ref().and_then(|i| i.token.clone());

        let remote = match token {
            Some(token) => self
                .client
                .post(self.endpoint("/v1/accounts:signOut"))
                .header("x-api-key", &self.api_key)
                .bearer_auth(token)
                .send()
                .await
                .map_err(|e| ProviderError::Network(e.to_string()))
                .map(|_| ()),
            // Nothing to revoke remotely; signing out twice is a no-op.
            None => Ok(()),
        };

        // Local state clears even when the revocation call fails, matching
        // provider SDK behavior; the caller still sees the failure.
        self.emit(None);
        if let Err(ref e) = remote {
            warn!(error = %e, "remote session revocation failed");
        }
        remote
    }
}
