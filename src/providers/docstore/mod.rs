//! External document store interface
//!
//! Schemaless JSON documents grouped into named collections. The store owns
//! the data; this crate only reads and writes through the collection CRUD
//! surface below, plus the narrow [`AuthorizationStore`] view used by the
//! access-control core.

mod rest;

pub use rest::RestDocumentStore;

use crate::core::models::AuthorizationRecord;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Collection holding per-identity authorization profiles
pub const PROFILES: &str = "profiles";
/// Collection holding pricing plans
pub const PRICING_PLANS: &str = "pricing_plans";
/// Collection holding customer reviews
pub const REVIEWS: &str = "reviews";
/// Collection holding service listings
pub const SERVICES: &str = "services";

/// Errors surfaced by the document store
#[derive(Error, Debug, Clone)]
pub enum StoreError {
    /// The addressed document does not exist
    #[error("document not found: {collection}/{id}")]
    NotFound { collection: String, id: String },
    /// Transport or storage failure
    #[error("document store failure: {0}")]
    Backend(String),
}

impl StoreError {
    /// Create a backend error
    pub fn backend<S: Into<String>>(message: S) -> Self {
        Self::Backend(message.into())
    }
}

/// A stored document: store-assigned id plus schemaless fields
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    #[serde(default)]
    pub fields: serde_json::Value,
    #[serde(default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(default)]
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl Document {
    /// Decode the document fields into a typed model.
    ///
    /// A document that does not match the expected shape is a backend
    /// problem, not a missing document.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, StoreError> {
        serde_json::from_value(self.fields.clone())
            .map_err(|e| StoreError::Backend(format!("malformed document {}: {e}", self.id)))
    }
}

/// Collection-level CRUD over the remote document store
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// List every document in a collection
    async fn list(&self, collection: &str) -> Result<Vec<Document>, StoreError>;

    /// Fetch one document; `Ok(None)` when it does not exist
    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>, StoreError>;

    /// Create a document with store-assigned id and creation timestamp
    async fn create(
        &self,
        collection: &str,
        fields: serde_json::Value,
    ) -> Result<Document, StoreError>;

    /// Merge the given fields into an existing document
    async fn update(
        &self,
        collection: &str,
        id: &str,
        fields: serde_json::Value,
    ) -> Result<Document, StoreError>;

    /// Delete a document; deleting a missing document is a no-op
    async fn delete(&self, collection: &str, id: &str) -> Result<(), StoreError>;
}

/// Narrow authorization view over the document store.
///
/// This is the only surface the access-control core is allowed to touch:
/// one read, keyed by identity id, never cached.
#[async_trait]
pub trait AuthorizationStore: Send + Sync {
    /// Fetch the authorization profile for an identity; `Ok(None)` when no
    /// profile has been provisioned.
    async fn authorization_record(
        &self,
        uid: &str,
    ) -> Result<Option<AuthorizationRecord>, StoreError>;
}

#[async_trait]
impl<T: DocumentStore + ?Sized> AuthorizationStore for T {
    async fn authorization_record(
        &self,
        uid: &str,
    ) -> Result<Option<AuthorizationRecord>, StoreError> {
        match self.get(PROFILES, uid).await? {
            Some(doc) => Ok(Some(doc.decode()?)),
            None => Ok(None),
        }
    }
}
