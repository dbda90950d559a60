//! In-memory and scripted test doubles for the external collaborators

use async_trait::async_trait;
use chrono::Utc;
use futures::StreamExt;
use parking_lot::Mutex;
use scribegate::core::models::Identity;
use scribegate::providers::docstore::{Document, DocumentStore, StoreError};
use scribegate::providers::identity::{
    IdentityBackend, IdentityProvider, ProviderError, SessionEvents,
};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use tokio::sync::mpsc;
use tokio_stream::wrappers::UnboundedReceiverStream;

/// In-memory document store with per-collection failure injection
#[derive(Default)]
pub struct InMemoryDocumentStore {
    collections: Mutex<HashMap<String, BTreeMap<String, Document>>>,
    next_id: AtomicUsize,
    failing_collection: Mutex<Option<String>>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Seed a document with a fixed id
    pub fn seed(&self, collection: &str, id: &str, fields: serde_json::Value) {
        self.collections
            .lock()
            .entry(collection.to_string())
            .or_default()
            .insert(
                id.to_string(),
                Document {
                    id: id.to_string(),
                    fields,
                    created_at: Some(Utc::now()),
                    updated_at: None,
                },
            );
    }

    /// Make every operation on one collection fail
    pub fn fail_collection(&self, collection: &str) {
        *self.failing_collection.lock() = Some(collection.to_string());
    }

    fn check(&self, collection: &str) -> Result<(), StoreError> {
        if self.failing_collection.lock().as_deref() == Some(collection) {
            return Err(StoreError::backend("injected failure"));
        }
        Ok(())
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn list(&self, collection: &str) -> Result<Vec<Document>, StoreError> {
        self.check(collection)?;
        Ok(self
            .collections
            .lock()
            .get(collection)
            .map(|docs| docs.values().cloned().collect())
            .unwrap_or_default())
    }

    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>, StoreError> {
        self.check(collection)?;
        Ok(self
            .collections
            .lock()
            .get(collection)
            .and_then(|docs| docs.get(id))
            .cloned())
    }

    async fn create(
        &self,
        collection: &str,
        fields: serde_json::Value,
    ) -> Result<Document, StoreError> {
        self.check(collection)?;
        let id = format!("doc-{}", self.next_id.fetch_add(1, Ordering::SeqCst));
        let doc = Document {
            id: id.clone(),
            fields,
            created_at: Some(Utc::now()),
            updated_at: None,
        };
        self.collections
            .lock()
            .entry(collection.to_string())
            .or_default()
            .insert(id, doc.clone());
        Ok(doc)
    }

    async fn update(
        &self,
        collection: &str,
        id: &str,
        fields: serde_json::Value,
    ) -> Result<Document, StoreError> {
        self.check(collection)?;
        let mut collections = self.collections.lock();
        let doc = collections
            .get_mut(collection)
            .and_then(|docs| docs.get_mut(id))
            .ok_or_else(|| StoreError::NotFound {
                collection: collection.to_string(),
                id: id.to_string(),
            })?;

        // Shallow merge, the way a PATCH against the real store behaves.
        if let (Some(existing), Some(patch)) = (doc.fields.as_object_mut(), fields.as_object()) {
            for (key, value) in patch {
                existing.insert(key.clone(), value.clone());
            }
        } else {
            doc.fields = fields;
        }
        doc.updated_at = Some(Utc::now());
        Ok(doc.clone())
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<(), StoreError> {
        self.check(collection)?;
        if let Some(docs) = self.collections.lock().get_mut(collection) {
            docs.remove(id);
        }
        Ok(())
    }
}

type Accounts = HashMap<String, (String, Identity)>;

/// Scripted identity backend: test-registered accounts, per-session change
/// streams, optional event suppression to hold sessions in the loading state.
pub struct ScriptedIdentityBackend {
    accounts: Arc<Mutex<Accounts>>,
    suppress_events: Arc<AtomicBool>,
}

impl ScriptedIdentityBackend {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            accounts: Arc::new(Mutex::new(HashMap::new())),
            suppress_events: Arc::new(AtomicBool::new(false)),
        })
    }

    /// Register an account the provider will accept
    pub fn register(&self, email: &str, password: &str, identity: Identity) {
        self.accounts
            .lock()
            .insert(email.to_string(), (password.to_string(), identity));
    }

    /// Stop emitting change events, leaving new sessions stuck in `loading`
    pub fn suppress_events(&self, suppress: bool) {
        self.suppress_events.store(suppress, Ordering::SeqCst);
    }
}

impl IdentityBackend for ScriptedIdentityBackend {
    fn open_session(&self) -> Arc<dyn IdentityProvider> {
        Arc::new(ScriptedIdentityProvider {
            accounts: Arc::clone(&self.accounts),
            suppress_events: Arc::clone(&self.suppress_events),
            state: Mutex::new(ProviderState::default()),
        })
    }
}

#[derive(Default)]
struct ProviderState {
    current: Option<Identity>,
    subscribers: Vec<mpsc::UnboundedSender<Option<Identity>>>,
}

/// One scripted provider session
pub struct ScriptedIdentityProvider {
    accounts: Arc<Mutex<Accounts>>,
    suppress_events: Arc<AtomicBool>,
    state: Mutex<ProviderState>,
}

impl ScriptedIdentityProvider {
    fn emit(&self, identity: Option<Identity>) {
        let mut state = self.state.lock();
        state.current = identity.clone();
        if self.suppress_events.load(Ordering::SeqCst) {
            return;
        }
        state
            .subscribers
            .retain(|tx| tx.send(identity.clone()).is_ok());
    }
}

#[async_trait]
impl IdentityProvider for ScriptedIdentityProvider {
    fn subscribe(&self) -> SessionEvents {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut state = self.state.lock();
        if !self.suppress_events.load(Ordering::SeqCst) {
            let _ = tx.send(state.current.clone());
        }
        state.subscribers.push(tx);
        UnboundedReceiverStream::new(rx).boxed()
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<Identity, ProviderError> {
        let identity = {
            let accounts = self.accounts.lock();
            match accounts.get(email) {
                Some((expected, identity)) if expected == password => identity.clone(),
                _ => return Err(ProviderError::InvalidCredentials),
            }
        };
        self.emit(Some(identity.clone()));
        Ok(identity)
    }

    async fn sign_out(&self) -> Result<(), ProviderError> {
        self.emit(None);
        Ok(())
    }
}
