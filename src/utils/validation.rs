//! Input validation helpers for login and content payloads

use crate::utils::error::{AppError, Result};
use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    // Permissive shape check; the identity provider is the authority.
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email regex")
});

/// Validators for request payloads
pub struct Validator;

impl Validator {
    /// Validate an email address shape
    pub fn validate_email(email: &str) -> Result<()> {
        if email.is_empty() {
            return Err(AppError::validation("Email is required"));
        }
        if !EMAIL_RE.is_match(email) {
            return Err(AppError::validation("Invalid email address"));
        }
        Ok(())
    }

    /// Validate a non-empty display field
    pub fn validate_required(field: &str, value: &str) -> Result<()> {
        if value.trim().is_empty() {
            return Err(AppError::validation(format!("{field} is required")));
        }
        Ok(())
    }

    /// Validate a review rating (1-5 stars)
    pub fn validate_rating(rating: u8) -> Result<()> {
        if !(1..=5).contains(&rating) {
            return Err(AppError::validation("Rating must be between 1 and 5"));
        }
        Ok(())
    }

    /// Validate a price value
    pub fn validate_price(price: f64) -> Result<()> {
        if !price.is_finite() || price < 0.0 {
            return Err(AppError::validation("Price must be a non-negative number"));
        }
        Ok(())
    }
}
