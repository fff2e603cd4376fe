//! Product Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::serde_helpers;
use super::store::StoreSnapshot;
use crate::types::Timestamp;

/// Product listing as stored in the `products` collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Store-assigned document id (absent until persisted)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Owning seller
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub seller_id: String,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub name: String,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub description: String,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub price: Decimal,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub stock: i64,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub category: String,
    /// Ordered image references, first one is the cover
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub images: Vec<String>,
    #[serde(
        default,
        deserialize_with = "serde_helpers::null_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub variants: Vec<ProductVariant>,
    /// Denormalized seller store identity
    #[serde(flatten)]
    pub store: StoreSnapshot,
    #[serde(default, with = "serde_helpers::lenient_millis")]
    pub created_at: Option<Timestamp>,
    #[serde(default, with = "serde_helpers::lenient_millis")]
    pub updated_at: Option<Timestamp>,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub views: i64,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub sold: i64,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub rating: f64,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub review_count: i64,
    /// Soft-delete flag; absent or null reads as visible
    #[serde(default = "default_true", deserialize_with = "serde_helpers::bool_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

impl Product {
    pub fn id_or_empty(&self) -> &str {
        self.id.as_deref().unwrap_or_default()
    }

    /// Variant with the given name, if the product has one
    pub fn variant_mut(&mut self, name: &str) -> Option<&mut ProductVariant> {
        self.variants.iter_mut().find(|v| v.name == name)
    }
}

/// Named variant (size, colour, ...) with its own stock
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductVariant {
    pub name: String,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub stock: i64,
    /// Overrides the product price when set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
}

/// Create product payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCreate {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: Decimal,
    pub stock: i64,
    pub category: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub variants: Vec<ProductVariant>,
}

/// Update product payload
///
/// Absent fields are left untouched. Serializes to exactly the fields that
/// are present, so it can be written as a partial document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variants: Option<Vec<ProductVariant>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl ProductUpdate {
    /// Apply the present fields onto an in-memory product
    pub fn apply_to(&self, product: &mut Product) {
        if let Some(v) = &self.name {
            product.name = v.clone();
        }
        if let Some(v) = &self.description {
            product.description = v.clone();
        }
        if let Some(v) = self.price {
            product.price = v;
        }
        if let Some(v) = self.stock {
            product.stock = v;
        }
        if let Some(v) = &self.category {
            product.category = v.clone();
        }
        if let Some(v) = &self.images {
            product.images = v.clone();
        }
        if let Some(v) = &self.variants {
            product.variants = v.clone();
        }
        if let Some(v) = self.is_active {
            product.is_active = v;
        }
    }
}

/// Outcome of propagating a seller's store info to all of their products
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkSyncResult {
    pub updated_count: usize,
}

/// Dashboard counters over a seller's visible products
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SellerStats {
    pub product_count: usize,
    pub total_stock: i64,
    pub total_sold: i64,
    pub total_views: i64,
    pub out_of_stock: usize,
}
