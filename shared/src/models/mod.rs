//! Domain models
//!
//! Products carry a denormalized copy of their seller's store identity so
//! listing screens never need a join against seller profiles.

pub mod product;
pub mod seller;
pub mod serde_helpers;
pub mod store;

pub use product::{
    BulkSyncResult, Product, ProductCreate, ProductUpdate, ProductVariant, SellerStats,
};
pub use seller::SellerProfile;
pub use store::{
    DEFAULT_STORE_LABEL, StoreInfo, StoreSnapshot, effective_store_name,
};
