//! Store identity and the denormalized snapshot embedded in products

use serde::{Deserialize, Serialize};

use super::seller::SellerProfile;
use super::serde_helpers;

/// Label used when neither a store name nor a seller name is known
pub const DEFAULT_STORE_LABEL: &str = "Toko Online";

/// Prefix for store names derived from the seller's own name
const DERIVED_STORE_PREFIX: &str = "Toko";

/// Resolve the store name shown on product listings.
///
/// A non-blank `store_name` wins. Otherwise the name is derived from the
/// seller (`"Toko {user_name}"`), and with no seller name either the fixed
/// [`DEFAULT_STORE_LABEL`] is used.
pub fn effective_store_name(store_name: &str, user_name: &str) -> String {
    if !store_name.trim().is_empty() {
        return store_name.to_string();
    }
    let user_name = user_name.trim();
    if !user_name.is_empty() {
        return format!("{DERIVED_STORE_PREFIX} {user_name}");
    }
    DEFAULT_STORE_LABEL.to_string()
}

/// Store identity supplied by the caller on create, update and bulk sync
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreInfo {
    /// Seller's personal display name, used for the derived store name
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub store_name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone: String,
}

/// Denormalized copy of a seller's store identity, embedded in each product
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreSnapshot {
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub store_name: String,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub store_city: String,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub store_address: String,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub store_phone: String,
}

impl StoreSnapshot {
    /// Snapshot for caller-supplied store info, with the name fallback applied
    pub fn resolve(info: &StoreInfo) -> Self {
        Self {
            store_name: effective_store_name(&info.store_name, &info.user_name),
            store_city: info.city.clone(),
            store_address: info.address.clone(),
            store_phone: info.phone.clone(),
        }
    }

    /// Authoritative snapshot computed from the seller's current profile
    pub fn from_profile(profile: &SellerProfile) -> Self {
        Self {
            store_name: effective_store_name(&profile.store_name, &profile.name),
            store_city: profile.city.clone(),
            store_address: profile.address.clone(),
            store_phone: profile.phone.clone(),
        }
    }

    /// True if any of the four snapshot fields differ
    pub fn has_drifted_from(&self, authoritative: &StoreSnapshot) -> bool {
        self != authoritative
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_store_name_wins() {
        assert_eq!(effective_store_name("Warung Sari", "Budi"), "Warung Sari");
    }

    #[test]
    fn blank_store_name_derives_from_user_name() {
        assert_eq!(effective_store_name("", "Budi"), "Toko Budi");
        assert_eq!(effective_store_name("   ", " Budi "), "Toko Budi");
    }

    #[test]
    fn all_blank_falls_back_to_generic_label() {
        assert_eq!(effective_store_name("", ""), "Toko Online");
        assert_eq!(effective_store_name(" ", "\t"), DEFAULT_STORE_LABEL);
    }

    #[test]
    fn resolve_copies_location_fields() {
        let info = StoreInfo {
            user_name: "Budi".into(),
            store_name: String::new(),
            city: "Bandung".into(),
            address: "Jl. Merdeka 1".into(),
            phone: "0812".into(),
        };
        let snapshot = StoreSnapshot::resolve(&info);
        assert_eq!(snapshot.store_name, "Toko Budi");
        assert_eq!(snapshot.store_city, "Bandung");
        assert_eq!(snapshot.store_address, "Jl. Merdeka 1");
        assert_eq!(snapshot.store_phone, "0812");
    }

    #[test]
    fn drift_detects_any_field() {
        let base = StoreSnapshot {
            store_name: "Toko Budi".into(),
            store_city: "Bandung".into(),
            store_address: "Jl. Merdeka 1".into(),
            store_phone: "0812".into(),
        };
        assert!(!base.has_drifted_from(&base.clone()));

        let mut moved = base.clone();
        moved.store_city = "Jakarta".into();
        assert!(base.has_drifted_from(&moved));

        let mut new_phone = base.clone();
        new_phone.store_phone = "0813".into();
        assert!(base.has_drifted_from(&new_phone));
    }
}
