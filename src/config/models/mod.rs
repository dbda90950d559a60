//! Configuration models

mod auth;
mod identity;
mod server;
mod store;

pub use auth::AuthConfig;
pub use identity::IdentityConfig;
pub use server::ServerConfig;
pub use store::DocumentStoreConfig;
