//! Common types for the shared crate

/// Timestamp type (Unix milliseconds)
pub type Timestamp = i64;

/// Collection holding product documents
pub const PRODUCTS_COLLECTION: &str = "products";

/// Collection holding seller profiles
pub const SELLERS_COLLECTION: &str = "sellers";
