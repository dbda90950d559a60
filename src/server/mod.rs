//! HTTP server implementation
//!
//! Actix-web server exposing the public content API, the auth endpoints, and
//! the guarded admin console API.

pub mod builder;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use server::HttpServer;
pub use state::AppState;
