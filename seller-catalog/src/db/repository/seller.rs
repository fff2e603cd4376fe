//! Seller Profile Repository
//!
//! Seller profiles are owned by the account side of the app. The catalog
//! only reads them, to know what a product's store snapshot should say.

use std::sync::Arc;

use async_trait::async_trait;
use shared::models::SellerProfile;
use shared::types::SELLERS_COLLECTION;

use super::{RepoResult, from_stored};
use crate::db::DocumentStore;

/// Read access to authoritative seller profiles
#[async_trait]
pub trait SellerProfileStore: Send + Sync {
    async fn get_profile(&self, seller_id: &str) -> RepoResult<Option<SellerProfile>>;
}

/// Seller profiles kept in the `sellers` collection of the document store
#[derive(Clone)]
pub struct SellerRepository {
    store: Arc<dyn DocumentStore>,
}

impl SellerRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl SellerProfileStore for SellerRepository {
    async fn get_profile(&self, seller_id: &str) -> RepoResult<Option<SellerProfile>> {
        if seller_id.trim().is_empty() {
            return Ok(None);
        }
        self.store
            .get(SELLERS_COLLECTION, seller_id)
            .await?
            .map(from_stored)
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::InMemoryDocumentStore;
    use serde_json::json;

    #[tokio::test]
    async fn loads_profile_with_id() {
        let store = InMemoryDocumentStore::new();
        store.insert_with_id(
            SELLERS_COLLECTION,
            "s1",
            json!({ "name": "Budi", "store_name": null, "city": "Bandung" })
                .as_object()
                .cloned()
                .unwrap(),
        );
        let repo = SellerRepository::new(Arc::new(store));

        let profile = repo.get_profile("s1").await.unwrap().unwrap();
        assert_eq!(profile.id.as_deref(), Some("s1"));
        assert_eq!(profile.name, "Budi");
        assert_eq!(profile.store_name, "");
        assert_eq!(profile.city, "Bandung");
    }

    #[tokio::test]
    async fn missing_or_blank_seller_is_none() {
        let repo = SellerRepository::new(Arc::new(InMemoryDocumentStore::new()));
        assert!(repo.get_profile("nobody").await.unwrap().is_none());
        assert!(repo.get_profile("  ").await.unwrap().is_none());
    }
}
