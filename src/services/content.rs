//! Content service
//!
//! Listing rules for the public site (ordering, visibility and active
//! filters) plus the admin console's CRUD operations, all over the remote
//! document store.

use crate::core::models::{
    ContentSummary, PricingPlan, PricingPlanDraft, Review, ReviewDraft, ServiceOffering,
    ServiceOfferingDraft,
};
use crate::providers::docstore::{self, Document, DocumentStore};
use crate::utils::error::{AppError, Result};
use crate::utils::validation::Validator;
use std::sync::Arc;
use tracing::{debug, info};

/// Content operations shared by the public site and the admin console
pub struct ContentService {
    store: Arc<dyn DocumentStore>,
}

impl ContentService {
    /// Create a service over the given document store
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    // --- Pricing plans ---

    /// List every pricing plan, cheapest position first
    pub async fn list_pricing_plans(&self) -> Result<Vec<PricingPlan>> {
        let docs = self.store.list(docstore::PRICING_PLANS).await?;
        let mut plans = decode_all::<PricingPlan>(docs)?;
        plans.sort_by_key(|p| p.sort_order);
        Ok(plans)
    }

    /// Create a pricing plan
    pub async fn create_pricing_plan(&self, draft: PricingPlanDraft) -> Result<PricingPlan> {
        validate_plan(&draft)?;
        let doc = self
            .store
            .create(docstore::PRICING_PLANS, serde_json::to_value(&draft)?)
            .await?;
        info!(id = %doc.id, "pricing plan created");
        decode_one(doc)
    }

    /// Replace a pricing plan's fields
    pub async fn update_pricing_plan(
        &self,
        id: &str,
        draft: PricingPlanDraft,
    ) -> Result<PricingPlan> {
        validate_plan(&draft)?;
        let doc = self
            .store
            .update(docstore::PRICING_PLANS, id, serde_json::to_value(&draft)?)
            .await?;
        decode_one(doc)
    }

    /// Delete a pricing plan
    pub async fn delete_pricing_plan(&self, id: &str) -> Result<()> {
        self.store.delete(docstore::PRICING_PLANS, id).await?;
        info!(id, "pricing plan deleted");
        Ok(())
    }

    // --- Reviews ---

    /// List reviews, newest first. Hidden reviews are only included for the
    /// admin console.
    pub async fn list_reviews(&self, include_hidden: bool) -> Result<Vec<Review>> {
        let docs = self.store.list(docstore::REVIEWS).await?;
        let mut reviews = docs
            .into_iter()
            .map(decode_review)
            .collect::<Result<Vec<_>>>()?;
        if !include_hidden {
            reviews.retain(|r| r.is_visible);
        }
        reviews.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(reviews)
    }

    /// Create a review
    pub async fn create_review(&self, draft: ReviewDraft) -> Result<Review> {
        validate_review(&draft)?;
        let doc = self
            .store
            .create(docstore::REVIEWS, serde_json::to_value(&draft)?)
            .await?;
        info!(id = %doc.id, "review created");
        decode_review(doc)
    }

    /// Replace a review's fields
    pub async fn update_review(&self, id: &str, draft: ReviewDraft) -> Result<Review> {
        validate_review(&draft)?;
        let doc = self
            .store
            .update(docstore::REVIEWS, id, serde_json::to_value(&draft)?)
            .await?;
        decode_review(doc)
    }

    /// Show or hide a review on the public site
    pub async fn set_review_visibility(&self, id: &str, visible: bool) -> Result<Review> {
        let doc = self
            .store
            .update(
                docstore::REVIEWS,
                id,
                serde_json::json!({ "is_visible": visible }),
            )
            .await?;
        debug!(id, visible, "review visibility changed");
        decode_review(doc)
    }

    /// Delete a review
    pub async fn delete_review(&self, id: &str) -> Result<()> {
        self.store.delete(docstore::REVIEWS, id).await?;
        info!(id, "review deleted");
        Ok(())
    }

    // --- Service listings ---

    /// List service offerings in display order. Inactive listings are only
    /// included for the admin console.
    pub async fn list_services(&self, include_inactive: bool) -> Result<Vec<ServiceOffering>> {
        let docs = self.store.list(docstore::SERVICES).await?;
        let mut services = decode_all::<ServiceOffering>(docs)?;
        if !include_inactive {
            services.retain(|s| s.is_active);
        }
        services.sort_by_key(|s| s.sort_order);
        Ok(services)
    }

    /// Create a service listing
    pub async fn create_service(&self, draft: ServiceOfferingDraft) -> Result<ServiceOffering> {
        Validator::validate_required("Name", &draft.name)?;
        let doc = self
            .store
            .create(docstore::SERVICES, serde_json::to_value(&draft)?)
            .await?;
        info!(id = %doc.id, "service listing created");
        decode_one(doc)
    }

    /// Replace a service listing's fields
    pub async fn update_service(
        &self,
        id: &str,
        draft: ServiceOfferingDraft,
    ) -> Result<ServiceOffering> {
        Validator::validate_required("Name", &draft.name)?;
        let doc = self
            .store
            .update(docstore::SERVICES, id, serde_json::to_value(&draft)?)
            .await?;
        decode_one(doc)
    }

    /// Activate or retire a service listing
    pub async fn set_service_status(&self, id: &str, active: bool) -> Result<ServiceOffering> {
        let doc = self
            .store
            .update(
                docstore::SERVICES,
                id,
                serde_json::json!({ "is_active": active }),
            )
            .await?;
        debug!(id, active, "service status changed");
        decode_one(doc)
    }

    /// Delete a service listing
    pub async fn delete_service(&self, id: &str) -> Result<()> {
        self.store.delete(docstore::SERVICES, id).await?;
        info!(id, "service listing deleted");
        Ok(())
    }

    // --- Dashboard ---

    /// Content counts for the admin dashboard
    pub async fn summary(&self) -> Result<ContentSummary> {
        let plans = self.list_pricing_plans().await?;
        let reviews = self.list_reviews(true).await?;
        let services = self.list_services(true).await?;

        Ok(ContentSummary {
            pricing_plans: plans.len(),
            visible_reviews: reviews.iter().filter(|r| r.is_visible).count(),
            reviews: reviews.len(),
            active_services: services.iter().filter(|s| s.is_active).count(),
            services: services.len(),
        })
    }
}

fn validate_plan(draft: &PricingPlanDraft) -> Result<()> {
    Validator::validate_required("Name", &draft.name)?;
    Validator::validate_price(draft.price)
}

fn validate_review(draft: &ReviewDraft) -> Result<()> {
    Validator::validate_required("Author name", &draft.author_name)?;
    Validator::validate_required("Content", &draft.content)?;
    Validator::validate_rating(draft.rating)
}

fn decode_all<T: serde::de::DeserializeOwned + WithId>(docs: Vec<Document>) -> Result<Vec<T>> {
    docs.into_iter().map(decode_one).collect()
}

fn decode_one<T: serde::de::DeserializeOwned + WithId>(doc: Document) -> Result<T> {
    let mut value: T = doc.decode().map_err(AppError::Store)?;
    value.set_id(doc.id);
    Ok(value)
}

fn decode_review(doc: Document) -> Result<Review> {
    let created_at = doc.created_at;
    let mut review: Review = decode_one(doc)?;
    // The store stamps creation time on the document envelope.
    if review.created_at.is_none() {
        review.created_at = created_at;
    }
    Ok(review)
}

/// Models that carry the store-assigned document id
trait WithId {
    fn set_id(&mut self, id: String);
}

impl WithId for PricingPlan {
    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

impl WithId for Review {
    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

impl WithId for ServiceOffering {
    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}
