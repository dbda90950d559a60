//! Test fixtures

use scribegate::core::models::Identity;

/// An identity provisioned with the admin role
pub fn admin_identity() -> Identity {
    Identity::new("admin-1", "admin@example.com")
}

/// A signed-in identity whose profile carries a non-admin role
pub fn writer_identity() -> Identity {
    Identity::new("writer-1", "writer@example.com")
}

/// An identity with no authorization profile at all
pub fn stranger_identity() -> Identity {
    Identity::new("stranger-1", "stranger@example.com")
}

/// Profile document fields with the given role claim
pub fn profile_fields(role: &str) -> serde_json::Value {
    serde_json::json!({ "role": role })
}

/// Pricing plan document fields
pub fn plan_fields(name: &str, price: f64, sort_order: i64) -> serde_json::Value {
    serde_json::json!({
        "name": name,
        "price": price,
        "price_suffix": "/page",
        "description": format!("{name} tier"),
        "features": ["Plagiarism report", "Unlimited revisions"],
        "is_popular": false,
        "sort_order": sort_order,
    })
}

/// Review document fields
pub fn review_fields(author: &str, rating: u8, visible: bool) -> serde_json::Value {
    serde_json::json!({
        "author_name": author,
        "rating": rating,
        "content": format!("Review from {author}"),
        "is_visible": visible,
    })
}

/// Service listing document fields
pub fn service_fields(name: &str, sort_order: i64, active: bool) -> serde_json::Value {
    serde_json::json!({
        "name": name,
        "description": format!("{name} for every academic level"),
        "icon": "graduation-cap",
        "sort_order": sort_order,
        "is_active": active,
    })
}
