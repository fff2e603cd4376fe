//! Shared types for the seller catalog
//!
//! Domain models, error types and the response envelope used by the
//! catalog services and by whatever front end drives them.

pub mod error;
pub mod models;
pub mod response;
pub mod types;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCode};
pub use response::AppResponse;
