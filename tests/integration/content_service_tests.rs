//! Content service over the in-memory document store

use crate::common::fixtures::{plan_fields, review_fields, service_fields};
use crate::common::stores::InMemoryDocumentStore;
use scribegate::AppError;
use scribegate::core::models::{PricingPlanDraft, ReviewDraft, ServiceOfferingDraft};
use scribegate::providers::docstore::{DocumentStore, PRICING_PLANS, REVIEWS, SERVICES, StoreError};
use scribegate::services::ContentService;
use std::sync::Arc;

fn plan_draft(name: &str, price: f64, sort_order: i64) -> PricingPlanDraft {
    PricingPlanDraft {
        name: name.to_string(),
        price,
        price_suffix: "/page".to_string(),
        description: String::new(),
        features: vec!["Free revisions".to_string()],
        is_popular: false,
        sort_order,
    }
}

#[tokio::test]
async fn pricing_plans_list_in_sort_order() {
    let store = InMemoryDocumentStore::new();
    store.seed(PRICING_PLANS, "b", plan_fields("Premium", 24.0, 2));
    store.seed(PRICING_PLANS, "a", plan_fields("Standard", 12.0, 1));
    let service = ContentService::new(store);

    let plans = service.list_pricing_plans().await.unwrap();
    assert_eq!(plans.len(), 2);
    assert_eq!(plans[0].name, "Standard");
    assert_eq!(plans[1].name, "Premium");
}

#[tokio::test]
async fn created_plans_carry_the_store_assigned_id() {
    let store = InMemoryDocumentStore::new();
    let service = ContentService::new(Arc::clone(&store) as Arc<dyn DocumentStore>);

    let plan = service
        .create_pricing_plan(plan_draft("Standard", 12.0, 1))
        .await
        .unwrap();
    assert!(!plan.id.is_empty());

    let listed = service.list_pricing_plans().await.unwrap();
    assert_eq!(listed[0].id, plan.id);
}

#[tokio::test]
async fn updating_a_missing_plan_is_not_found() {
    let store = InMemoryDocumentStore::new();
    let service = ContentService::new(store);

    let err = service
        .update_pricing_plan("ghost", plan_draft("Standard", 12.0, 1))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        AppError::Store(StoreError::NotFound { .. })
    ));
}

#[tokio::test]
async fn deleting_a_plan_twice_is_harmless() {
    let store = InMemoryDocumentStore::new();
    store.seed(PRICING_PLANS, "a", plan_fields("Standard", 12.0, 1));
    let service = ContentService::new(store);

    service.delete_pricing_plan("a").await.unwrap();
    service.delete_pricing_plan("a").await.unwrap();
    assert!(service.list_pricing_plans().await.unwrap().is_empty());
}

#[tokio::test]
async fn public_reviews_exclude_hidden_entries() {
    let store = InMemoryDocumentStore::new();
    store.seed(REVIEWS, "r1", review_fields("Ada", 5, true));
    store.seed(REVIEWS, "r2", review_fields("Bob", 2, false));
    let service = ContentService::new(store);

    let public = service.list_reviews(false).await.unwrap();
    assert_eq!(public.len(), 1);
    assert_eq!(public[0].author_name, "Ada");

    let all = service.list_reviews(true).await.unwrap();
    assert_eq!(all.len(), 2);
}

#[tokio::test]
async fn visibility_toggle_round_trips() {
    let store = InMemoryDocumentStore::new();
    store.seed(REVIEWS, "r1", review_fields("Ada", 5, true));
    let service = ContentService::new(store);

    let hidden = service.set_review_visibility("r1", false).await.unwrap();
    assert!(!hidden.is_visible);
    assert!(service.list_reviews(false).await.unwrap().is_empty());

    let shown = service.set_review_visibility("r1", true).await.unwrap();
    assert!(shown.is_visible);
}

#[tokio::test]
async fn review_ratings_are_bounded() {
    let store = InMemoryDocumentStore::new();
    let service = ContentService::new(store);

    let err = service
        .create_review(ReviewDraft {
            author_name: "Ada".to_string(),
            rating: 6,
            content: "Too enthusiastic".to_string(),
            is_visible: true,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
}

#[tokio::test]
async fn inactive_services_stay_out_of_the_public_list() {
    let store = InMemoryDocumentStore::new();
    store.seed(SERVICES, "s1", service_fields("Essays", 1, true));
    store.seed(SERVICES, "s2", service_fields("Dissertations", 2, false));
    let service = ContentService::new(store);

    let public = service.list_services(false).await.unwrap();
    assert_eq!(public.len(), 1);
    assert_eq!(public[0].name, "Essays");

    let admin_view = service.list_services(true).await.unwrap();
    assert_eq!(admin_view.len(), 2);
}

#[tokio::test]
async fn status_toggle_retires_and_restores_a_service() {
    let store = InMemoryDocumentStore::new();
    store.seed(SERVICES, "s1", service_fields("Essays", 1, true));
    let service = ContentService::new(store);

    let retired = service.set_service_status("s1", false).await.unwrap();
    assert!(!retired.is_active);
    assert!(service.list_services(false).await.unwrap().is_empty());
}

#[tokio::test]
async fn blank_service_names_are_rejected() {
    let store = InMemoryDocumentStore::new();
    let service = ContentService::new(store);

    let err = service
        .create_service(ServiceOfferingDraft {
            name: "  ".to_string(),
            description: None,
            icon: None,
            sort_order: 0,
            is_active: true,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
}

#[tokio::test]
async fn summary_counts_every_collection() {
    let store = InMemoryDocumentStore::new();
    store.seed(PRICING_PLANS, "p1", plan_fields("Standard", 12.0, 1));
    store.seed(REVIEWS, "r1", review_fields("Ada", 5, true));
    store.seed(REVIEWS, "r2", review_fields("Bob", 3, false));
    store.seed(SERVICES, "s1", service_fields("Essays", 1, true));
    store.seed(SERVICES, "s2", service_fields("Dissertations", 2, false));
    let service = ContentService::new(store);

    let summary = service.summary().await.unwrap();
    assert_eq!(summary.pricing_plans, 1);
    assert_eq!(summary.reviews, 2);
    assert_eq!(summary.visible_reviews, 1);
    assert_eq!(summary.services, 2);
    assert_eq!(summary.active_services, 1);
}

#[tokio::test]
async fn store_failures_propagate_as_store_errors() {
    let store = InMemoryDocumentStore::new();
    store.fail_collection(PRICING_PLANS);
    let service = ContentService::new(store);

    let err = service.list_pricing_plans().await.unwrap_err();
    assert!(matches!(err, AppError::Store(StoreError::Backend(_))));
}
