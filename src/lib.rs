//! # scribegate
//!
//! Backend for an academic-writing service: the public content API behind
//! the marketing site, plus an authentication-gated admin console API for
//! editing pricing plans, reviews, and service listings.
//!
//! The interesting part is the access-control core in [`auth`]: a session
//! store fed by the identity provider's change stream, a role resolver over
//! the document store, and two gates in front of the admin API: the
//! authentication-boundary route guard and the fail-closed, role-aware
//! admin access controller.
//!
//! ## Running the server
//!
//! ```rust,no_run
//! use scribegate::Config;
//! use scribegate::server::HttpServer;
//!
//! #[tokio::main]
//! async fn main() -> scribegate::Result<()> {
//!     let config = Config::from_file("config/scribegate.yaml").await?;
//!     HttpServer::new(&config).await?.start().await
//! }
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod auth;
pub mod config;
pub mod core;
pub mod providers;
pub mod server;
pub mod services;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use utils::error::{AppError, Result};
