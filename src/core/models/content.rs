//! Content collections managed through the admin console
//!
//! Each model mirrors a document-store collection; the `*Draft` types carry
//! the writable fields for create/update payloads, the full types add the
//! store-assigned id and timestamps.

use serde::{Deserialize, Serialize};

/// A pricing plan shown on the prices page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingPlan {
    /// Store-assigned document id
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub price: f64,
    /// Suffix rendered after the price, e.g. "/page"
    #[serde(default)]
    pub price_suffix: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
    /// Highlighted as the recommended plan
    #[serde(default)]
    pub is_popular: bool,
    #[serde(default)]
    pub sort_order: i64,
}

/// Writable fields of a pricing plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingPlanDraft {
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub price_suffix: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub is_popular: bool,
    #[serde(default)]
    pub sort_order: i64,
}

/// A customer review (testimonial)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    #[serde(default)]
    pub id: String,
    pub author_name: String,
    /// Star rating, 1-5
    pub rating: u8,
    pub content: String,
    /// Hidden reviews stay editable in the console but never render publicly
    #[serde(default = "default_true")]
    pub is_visible: bool,
    #[serde(default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// Writable fields of a review
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewDraft {
    pub author_name: String,
    pub rating: u8,
    pub content: String,
    #[serde(default = "default_true")]
    pub is_visible: bool,
}

/// A service listing, e.g. "Essay Writing" or "Dissertation Help"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceOffering {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Icon name for the marketing site
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub sort_order: i64,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

/// Writable fields of a service listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceOfferingDraft {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub sort_order: i64,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

/// Content counts for the admin dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentSummary {
    pub pricing_plans: usize,
    pub reviews: usize,
    pub visible_reviews: usize,
    pub services: usize,
    pub active_services: usize,
}

fn default_true() -> bool {
    true
}
