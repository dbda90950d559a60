//! Identity and authorization record types

use serde::{Deserialize, Serialize};

/// An authenticated principal issued by the external identity provider.
///
/// The provider owns the credential state; this is a read-only view held for
/// the lifetime of the session subscription.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Provider-unique identifier
    pub uid: String,
    /// Email address the account was registered with
    pub email: String,
    /// Opaque provider token for follow-up calls (never serialized out)
    #[serde(skip_serializing, default)]
    pub token: Option<String>,
}

impl Identity {
    /// Create an identity without a provider token
    pub fn new<U: Into<String>, E: Into<String>>(uid: U, email: E) -> Self {
        Self {
            uid: uid.into(),
            email: email.into(),
            token: None,
        }
    }
}

/// Per-identity authorization profile, stored in the document store's
/// `profiles` collection and keyed by uid.
///
/// The store is schemaless; a profile without a `role` field simply carries
/// an empty role claim, which never grants anything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizationRecord {
    /// Role claim checked against `admin` to gate the admin console
    #[serde(default)]
    pub role: String,
}

impl AuthorizationRecord {
    /// Build a record with the given role claim
    pub fn with_role<S: Into<String>>(role: S) -> Self {
        Self { role: role.into() }
    }
}
