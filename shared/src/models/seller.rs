//! Seller Profile Model

use serde::{Deserialize, Serialize};

use super::serde_helpers;

/// Authoritative seller profile, owned by the account side of the app
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SellerProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Seller's personal name
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub name: String,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub store_name: String,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub city: String,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub address: String,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub phone: String,
}
