//! REST client for the hosted document store

use super::{Document, DocumentStore, StoreError};
use crate::config::DocumentStoreConfig;
use crate::utils::error::AppError;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

/// Document store client over its REST API
pub struct RestDocumentStore {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl RestDocumentStore {
    /// Build the client from configuration
    pub fn new(config: &DocumentStoreConfig) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::config(format!("document store client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    fn collection_url(&self, collection: &str) -> String {
        format!("{}/v1/collections/{collection}/documents", self.base_url)
    }

    fn document_url(&self, collection: &str, id: &str) -> String {
        format!("{}/{id}", self.collection_url(collection))
    }

    async fn decode_document(response: reqwest::Response) -> Result<Document, StoreError> {
        response
            .json::<Document>()
            .await
            .map_err(|e| StoreError::Backend(format!("malformed store response: {e}")))
    }
}

#[derive(Debug, Deserialize)]
struct ListResponse {
    #[serde(default)]
    documents: Vec<Document>,
}

fn transport_error(e: reqwest::Error) -> StoreError {
    StoreError::Backend(format!("transport: {e}"))
}

fn status_error(context: &str, status: StatusCode) -> StoreError {
    StoreError::Backend(format!("{context} failed with status {status}"))
}

#[async_trait]
impl DocumentStore for RestDocumentStore {
    async fn list(&self, collection: &str) -> Result<Vec<Document>, StoreError> {
        debug!(collection, "listing documents");

        let response = self
            .client
            .get(self.collection_url(collection))
            .header("x-api-key", &self.api_key)
            .send()
            .await
            .map_err(transport_error)?;

        if !response.status().is_success() {
            return Err(status_error("list", response.status()));
        }

        let body: ListResponse = response
            .json()
            .await
            .map_err(|e| StoreError::Backend(format!("malformed store response: {e}")))?;
        Ok(body.documents)
    }

    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>, StoreError> {
        let response = self
            .client
            .get(self.document_url(collection, id))
            .header("x-api-key", &self.api_key)
            .send()
            .await
            .map_err(transport_error)?;

        match response.status() {
            StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => Ok(Some(Self::decode_document(response).await?)),
            status => Err(status_error("get", status)),
        }
    }

    async fn create(
        &self,
        collection: &str,
        fields: serde_json::Value,
    ) -> Result<Document, StoreError> {
        let response = self
            .client
            .post(self.collection_url(collection))
            .header("x-api-key", &self.api_key)
            .json(&serde_json::json!({ "fields": fields }))
            .send()
            .await
            .map_err(transport_error)?;

        if !response.status().is_success() {
            return Err(status_error("create", response.status()));
        }
        Self::decode_document(response).await
    }

    async fn update(
        &self,
        collection: &str,
        id: &str,
        fields: serde_json::Value,
    ) -> Result<Document, StoreError> {
        let response = self
            .client
            .patch(self.document_url(collection, id))
            .header("x-api-key", &self.api_key)
            .json(&serde_json::json!({ "fields": fields }))
            .send()
            .await
            .map_err(transport_error)?;

        match response.status() {
            StatusCode::NOT_FOUND => Err(StoreError::NotFound {
                collection: collection.to_string(),
                id: id.to_string(),
            }),
            status if status.is_success() => Self::decode_document(response).await,
            status => Err(status_error("update", status)),
        }
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<(), StoreError> {
        let response = self
            .client
            .delete(self.document_url(collection, id))
            .header("x-api-key", &self.api_key)
            .send()
            .await
            .map_err(transport_error)?;

        match response.status() {
            // Deleting an already-deleted document is a no-op.
            StatusCode::NOT_FOUND => Ok(()),
            status if status.is_success() => Ok(()),
            status => Err(status_error("delete", status)),
        }
    }
}
