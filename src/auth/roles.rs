//! Role resolution against the authorization store

use crate::providers::docstore::AuthorizationStore;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::time::timeout;
use tracing::debug;

/// Role claim attached to an identity.
///
/// Only `admin` grants console access; every other claim is carried verbatim
/// for logging but treated uniformly as non-admin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Role {
    Admin,
    Other(String),
}

impl Role {
    /// The claim string that grants admin access
    pub const ADMIN_CLAIM: &'static str = "admin";

    /// Map a raw claim string to a role
    pub fn from_claim(claim: &str) -> Self {
        if claim == Self::ADMIN_CLAIM {
            Role::Admin
        } else {
            Role::Other(claim.to_string())
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Admin => write!(f, "admin"),
            Role::Other(claim) => write!(f, "{claim}"),
        }
    }
}

/// Role lookup failures.
///
/// Callers on the admin path treat both variants as denial; the split exists
/// so logs can tell a missing profile from an unreachable store.
#[derive(Error, Debug, Clone)]
pub enum RoleLookupError {
    /// No authorization record provisioned for the identity
    #[error("no authorization record for identity")]
    NotFound,
    /// Transport/storage failure, including an elapsed lookup timeout
    #[error("role lookup failed: {0}")]
    Backend(String),
}

/// Maps an identity id to its role claim.
///
/// Pure read with no caching: every access-control check re-fetches, so a
/// role revoked mid-session is caught on the next check.
pub struct RoleResolver {
    store: Arc<dyn AuthorizationStore>,
    lookup_timeout: Duration,
}

impl RoleResolver {
    /// Create a resolver over the given authorization store
    pub fn new(store: Arc<dyn AuthorizationStore>, lookup_timeout: Duration) -> Self {
        Self {
            store,
            lookup_timeout,
        }
    }

    /// Resolve the role for an identity id.
    ///
    /// The lookup is bounded: an elapsed timeout is a backend failure, since
    /// under the fail-closed policy a hang is equivalent to a silent lockout.
    pub async fn resolve(&self, uid: &str) -> Result<Role, RoleLookupError> {
        let record = match timeout(self.lookup_timeout, self.store.authorization_record(uid)).await
        {
            Ok(Ok(Some(record))) => record,
            Ok(Ok(None)) => return Err(RoleLookupError::NotFound),
            Ok(Err(e)) => return Err(RoleLookupError::Backend(e.to_string())),
            Err(_) => {
                return Err(RoleLookupError::Backend(format!(
                    "timed out after {:?}",
                    self.lookup_timeout
                )));
            }
        };

        let role = Role::from_claim(&record.role);
        debug!(uid, %role, "role resolved");
        Ok(role)
    }
}
