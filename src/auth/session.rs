//! Session state fed by the identity provider's change stream

use crate::core::models::Identity;
use crate::providers::identity::SessionEvents;
use futures::StreamExt;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Last known authentication state for one client session.
///
/// `identity` is unreliable while `loading` is set: nothing has been heard
/// from the provider yet, so "nobody signed in" and "not resolved yet" are
/// still indistinguishable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub identity: Option<Identity>,
    pub loading: bool,
}

impl Session {
    /// A resolved session carrying the provider's latest answer
    pub fn resolved(identity: Option<Identity>) -> Self {
        Self {
            identity,
            loading: false,
        }
    }

    /// Whether a principal is signed in (meaningless while `loading`)
    pub fn signed_in(&self) -> bool {
        self.identity.is_some()
    }
}

impl Default for Session {
    fn default() -> Self {
        // Process start: nothing heard from the provider yet.
        Self {
            identity: None,
            loading: true,
        }
    }
}

/// Holds the session for one subscription lifetime.
///
/// Exactly one listener forwards provider events into a watch channel; it is
/// the sole writer, so `loading` flips to `false` at the first event and
/// never reverts. Dropping the store aborts the listener, which is what
/// unsubscribes from the provider stream.
pub struct SessionStore {
    rx: watch::Receiver<Session>,
    listener: JoinHandle<()>,
}

impl SessionStore {
    /// Register the single listener for this store's lifetime
    pub fn subscribe(events: SessionEvents) -> Self {
        let (tx, rx) = watch::channel(Session::default());
        let listener = tokio::spawn(async move {
            let mut events = events;
            while let Some(identity) = events.next().await {
                tx.send_replace(Session::resolved(identity));
            }
            // Stream end freezes the last state; the registry TTL bounds how
            // long a frozen session stays reachable.
        });
        Self { rx, listener }
    }

    /// Synchronous snapshot of the latest pushed state
    pub fn current(&self) -> Session {
        self.rx.borrow().clone()
    }

    /// Watch receiver for consumers that must wait on `loading`
    pub fn changes(&self) -> watch::Receiver<Session> {
        self.rx.clone()
    }
}

impl Drop for SessionStore {
    fn drop(&mut self) {
        self.listener.abort();
    }
}
