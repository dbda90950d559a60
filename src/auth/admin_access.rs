//! Role-aware admin gate
//!
//! The stricter check run on every entry into the admin shell: a signed-in
//! but non-admin principal must still be rejected, and every ambiguous
//! outcome fails closed.

use crate::auth::manager::AuthSessionManager;
use crate::auth::roles::RoleResolver;
use crate::core::models::Identity;
use tracing::{info, warn};

/// Position of the access check state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessState {
    /// Waiting for the session to resolve
    Initializing,
    /// Role lookup in flight
    CheckingRole,
    /// Admin role confirmed; the protected subtree may render
    Granted,
    /// Terminal for this attempt; a fresh login starts a new controller
    Denied,
}

/// What the console must do after a denial
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessDenial {
    /// User-visible notice; `None` when the user was simply not signed in
    /// (no notice, just the redirect)
    pub notice: Option<String>,
    /// Redirect target; history is replaced, not pushed
    pub redirect: String,
}

/// Outcome of one access check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessOutcome {
    Granted { identity: Identity },
    Denied(AccessDenial),
}

/// Runs the role-aware gate for one admin-shell entry.
///
/// A controller runs once; re-entering the shell constructs a new one, so a
/// grant is never cached across navigations and a role revoked mid-session
/// is caught on the next entry. Dropping the `authorize` future before the
/// role lookup settles discards the check entirely; no state update happens
/// against an abandoned attempt.
pub struct AdminAccessController<'m> {
    manager: &'m AuthSessionManager,
    resolver: &'m RoleResolver,
    admin_login_route: String,
    state: AccessState,
}

impl<'m> AdminAccessController<'m> {
    /// Create a controller for one admin-shell entry
    pub fn new(
        manager: &'m AuthSessionManager,
        resolver: &'m RoleResolver,
        admin_login_route: impl Into<String>,
    ) -> Self {
        Self {
            manager,
            resolver,
            admin_login_route: admin_login_route.into(),
            state: AccessState::Initializing,
        }
    }

    /// Current machine position (observable for diagnostics and tests)
    pub fn state(&self) -> AccessState {
        self.state
    }

    /// Run the state machine to completion.
    ///
    /// The role resolver is never consulted before the session has resolved,
    /// and never when the resolved session carries no identity.
    pub async fn authorize(&mut self) -> AccessOutcome {
        self.state = AccessState::Initializing;

        let mut changes = self.manager.session_changes();
        let session = match changes.wait_for(|s| !s.loading).await {
            Ok(session) => session.clone(),
            // Store torn down mid-wait; indistinguishable from signed out.
            Err(_) => return self.deny_signed_out(),
        };

        let Some(identity) = session.identity else {
            return self.deny_signed_out();
        };

        self.state = AccessState::CheckingRole;
        match self.resolver.resolve(&identity.uid).await {
            Ok(role) if role.is_admin() => {
                info!(uid = %identity.uid, "admin access granted");
                self.state = AccessState::Granted;
                AccessOutcome::Granted { identity }
            }
            Ok(role) => {
                info!(uid = %identity.uid, %role, "admin access denied: non-admin role");
                self.deny_checked("Access denied: admin privileges required.")
                    .await
            }
            Err(err) => {
                warn!(uid = %identity.uid, error = %err, "admin access denied: role lookup failed");
                self.deny_checked("Access check failed: could not verify admin role.")
                    .await
            }
        }
    }

    /// Denial before the role check: no identity, so nothing to sign out and
    /// no notice, just the admin-login redirect.
    fn deny_signed_out(&mut self) -> AccessOutcome {
        self.state = AccessState::Denied;
        AccessOutcome::Denied(AccessDenial {
            notice: None,
            redirect: self.admin_login_route.clone(),
        })
    }

    /// Fail-closed exit from `CheckingRole`: sign out, notify, redirect, in
    /// that order, always all three.
    async fn deny_checked(&mut self, notice: &str) -> AccessOutcome {
        if let Err(e) = self.manager.logout().await {
            // Already denying; a sign-out failure must not mask the denial.
            warn!(error = %e, "sign-out during access denial failed");
        }
        self.state = AccessState::Denied;
        AccessOutcome::Denied(AccessDenial {
            notice: Some(notice.to_string()),
            redirect: self.admin_login_route.clone(),
        })
    }
}
