//! Unified error system for the seller catalog
//!
//! - [`ErrorCode`]: Standardized error codes
//! - [`AppError`]: Error carrying a code and a caller-facing message
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 6xxx: Product and seller errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! let err = AppError::new(ErrorCode::ProductNotFound);
//! assert_eq!(err.message, "Product not found");
//!
//! let err = AppError::validation("Product name must not be empty");
//! assert_eq!(err.code, ErrorCode::ValidationFailed);
//! ```

mod codes;
mod types;

pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult};
