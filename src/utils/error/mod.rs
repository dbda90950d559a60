//! Error handling for the backend

mod error;

pub use error::{AppError, Result};
