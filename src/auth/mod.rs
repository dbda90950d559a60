//! Authentication-gated admin access control
//!
//! The flow, in order: the identity provider's change stream feeds a
//! [`SessionStore`]; an [`AuthSessionManager`] wraps the store plus
//! credential calls and is the single source of truth for "who is signed
//! in"; the [`GuardState`] route guard gates the admin subtree at the
//! authentication boundary; the [`AdminAccessController`] additionally
//! resolves the role through a [`RoleResolver`] and fails closed on
//! everything but a confirmed admin claim.

pub mod admin_access;
pub mod guard;
pub mod manager;
pub mod registry;
pub mod roles;
pub mod session;


pub use admin_access::{AccessDenial, AccessOutcome, AccessState, AdminAccessController};
pub use guard::GuardState;
pub use manager::{AuthError, AuthSessionManager};
pub use registry::{ClientSession, SessionRegistry};
pub use roles::{Role, RoleLookupError, RoleResolver};
pub use session::{Session, SessionStore};
