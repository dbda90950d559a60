//! REST document store client against a mock server

use scribegate::config::DocumentStoreConfig;
use scribegate::providers::docstore::{
    AuthorizationStore, DocumentStore, PROFILES, RestDocumentStore, StoreError,
};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn store(base_url: String) -> RestDocumentStore {
    RestDocumentStore::new(&DocumentStoreConfig {
        base_url,
        api_key: "store-key".to_string(),
        timeout_secs: 5,
    })
    .unwrap()
}

#[tokio::test]
async fn list_decodes_the_document_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/collections/pricing_plans/documents"))
        .and(header("x-api-key", "store-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "documents": [
                { "id": "p1", "fields": { "name": "Standard", "price": 12.0 } },
                { "id": "p2", "fields": { "name": "Premium", "price": 24.0 } },
            ]
        })))
        .mount(&server)
        .await;

    let docs = store(server.uri()).list("pricing_plans").await.unwrap();
    assert_eq!(docs.len(), 2);
    assert_eq!(docs[0].id, "p1");
    assert_eq!(docs[0].fields["name"], "Standard");
}

#[tokio::test]
async fn get_maps_missing_documents_to_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/collections/profiles/documents/ghost"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let doc = store(server.uri()).get(PROFILES, "ghost").await.unwrap();
    assert!(doc.is_none());
}

#[tokio::test]
async fn create_posts_the_fields_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/collections/reviews/documents"))
        .and(body_json(json!({ "fields": { "author_name": "Ada" } })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "r1",
            "fields": { "author_name": "Ada" },
            "created_at": "2026-01-05T10:00:00Z",
        })))
        .mount(&server)
        .await;

    let doc = store(server.uri())
        .create("reviews", json!({ "author_name": "Ada" }))
        .await
        .unwrap();
    assert_eq!(doc.id, "r1");
    assert!(doc.created_at.is_some());
}

#[tokio::test]
async fn updating_a_missing_document_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/v1/collections/reviews/documents/ghost"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = store(server.uri())
        .update("reviews", "ghost", json!({ "is_visible": false }))
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::NotFound { .. }));
}

#[tokio::test]
async fn deleting_a_missing_document_is_a_no_op() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/v1/collections/reviews/documents/ghost"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    store(server.uri()).delete("reviews", "ghost").await.unwrap();
}

#[tokio::test]
async fn server_failures_map_to_backend_errors() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/collections/pricing_plans/documents"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = store(server.uri()).list("pricing_plans").await.unwrap_err();
    assert!(matches!(err, StoreError::Backend(_)));
}

#[tokio::test]
async fn unreachable_hosts_map_to_backend_errors() {
    let err = store("http://127.0.0.1:9".to_string())
        .list("pricing_plans")
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::Backend(_)));
}

#[tokio::test]
async fn authorization_records_read_from_the_profiles_collection() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/collections/profiles/documents/u1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "u1",
            "fields": { "role": "admin" },
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/collections/profiles/documents/u2"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let store = store(server.uri());
    let record = store.authorization_record("u1").await.unwrap().unwrap();
    assert_eq!(record.role, "admin");
    assert!(store.authorization_record("u2").await.unwrap().is_none());
}

#[tokio::test]
async fn profiles_without_a_role_claim_decode_with_an_empty_role() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/collections/profiles/documents/u3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "u3",
            "fields": { "display_name": "No role here" },
        })))
        .mount(&server)
        .await;

    let record = store(server.uri())
        .authorization_record("u3")
        .await
        .unwrap()
        .unwrap();
    // An absent claim never grants anything.
    assert!(record.role.is_empty());
}
