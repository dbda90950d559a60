//! Domain models
//!
//! Identity and authorization types plus the content collections managed
//! through the admin console.

mod content;
mod identity;

pub use content::{
    ContentSummary, PricingPlan, PricingPlanDraft, Review, ReviewDraft, ServiceOffering,
    ServiceOfferingDraft,
};
pub use identity::{AuthorizationRecord, Identity};
