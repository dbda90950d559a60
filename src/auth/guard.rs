//! Authentication-boundary gate for the admin subtree
//!
//! Signed-in versus not, independent of role; the stricter role check lives
//! in [`crate::auth::admin_access`]. The guard holds no state of its own:
//! every decision is a pure read of the session.

use crate::auth::session::Session;

/// Guard decision for a navigation attempt into the admin subtree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardState {
    /// Session still resolving: show a neutral placeholder, never redirect
    Pending,
    /// Resolved and signed out: redirect to the login route, replacing
    /// history so back-navigation cannot re-enter the guarded route
    Denied,
    /// Resolved and signed in: render the guarded subtree
    Allowed,
}

impl GuardState {
    /// Evaluate the guard against the latest session state
    pub fn evaluate(session: &Session) -> Self {
        if session.loading {
            GuardState::Pending
        } else if session.identity.is_none() {
            GuardState::Denied
        } else {
            GuardState::Allowed
        }
    }
}
