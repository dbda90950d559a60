//! External collaborators
//!
//! The backend talks to exactly two remote systems, each behind a narrow
//! trait: the identity provider (credential verification and auth-state
//! change notifications) and the document store (content collections and
//! authorization profiles). Everything else in the crate depends on the
//! traits, never on the REST implementations.

pub mod docstore;
pub mod identity;
