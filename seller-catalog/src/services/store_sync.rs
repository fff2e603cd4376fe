//! Store Sync Service - keeps product store snapshots in line with seller profiles
//!
//! Products carry a copy of their seller's store identity. It goes stale
//! when the seller edits their profile; this service repairs it either
//! lazily (one product at read time) or in bulk (all products of a seller).

use std::sync::Arc;

use futures::future::join_all;
use shared::models::{BulkSyncResult, Product, StoreInfo, StoreSnapshot};
use shared::util::now_millis;

use crate::db::repository::{ProductRepository, RepoError, RepoResult, SellerProfileStore};

#[derive(Clone)]
pub struct StoreSyncService {
    products: ProductRepository,
    sellers: Arc<dyn SellerProfileStore>,
}

impl StoreSyncService {
    pub fn new(products: ProductRepository, sellers: Arc<dyn SellerProfileStore>) -> Self {
        Self { products, sellers }
    }

    /// Load a product and repair its store snapshot if it drifted.
    ///
    /// Read-repair is best effort: a missing profile or a failed repair
    /// write still returns the product as stored.
    pub async fn product_with_fresh_seller_info(&self, product_id: &str) -> RepoResult<Product> {
        let mut product = self.products.get_by_id(product_id).await?;

        let profile = match self.sellers.get_profile(&product.seller_id).await {
            Ok(Some(profile)) => profile,
            Ok(None) => {
                tracing::debug!(product_id = %product_id, seller_id = %product.seller_id, "Seller profile missing, skipping repair");
                return Ok(product);
            }
            Err(e) => {
                tracing::warn!(product_id = %product_id, seller_id = %product.seller_id, error = %e, "Seller profile unreadable, skipping repair");
                return Ok(product);
            }
        };

        let fresh = StoreSnapshot::from_profile(&profile);
        if !product.store.has_drifted_from(&fresh) {
            return Ok(product);
        }

        let now = now_millis();
        match self.products.write_store_snapshot(product_id, &fresh, now).await {
            Ok(()) => {
                tracing::info!(product_id = %product_id, seller_id = %product.seller_id, "Store snapshot repaired");
                product.store = fresh;
                product.updated_at = Some(now);
            }
            Err(e) => {
                tracing::error!(product_id = %product_id, error = %e, "Store snapshot repair failed");
            }
        }
        Ok(product)
    }

    /// Write `store_info` into every product of `seller_id`, soft-deleted included.
    ///
    /// Updates run concurrently and are not transactional: writes that
    /// succeeded stay applied when others fail.
    pub async fn bulk_sync_store_info(
        &self,
        seller_id: &str,
        store_info: &StoreInfo,
    ) -> RepoResult<BulkSyncResult> {
        let products = self.products.find_all_by_seller(seller_id).await?;
        if products.is_empty() {
            return Ok(BulkSyncResult::default());
        }

        let snapshot = StoreSnapshot::resolve(store_info);
        let now = now_millis();
        let total = products.len();

        let repo = &self.products;
        let snapshot = &snapshot;
        let results = join_all(products.iter().map(|p| async move {
            let id = p.id_or_empty();
            let result = repo.write_store_snapshot(id, snapshot, now).await;
            (id, result)
        }))
        .await;

        let mut failed = 0usize;
        for (id, result) in results {
            if let Err(e) = result {
                failed += 1;
                tracing::error!(product_id = %id, seller_id = %seller_id, error = %e, "Store info sync failed");
            }
        }

        if failed > 0 {
            return Err(RepoError::Database(format!(
                "{failed} of {total} product updates failed"
            )));
        }

        tracing::info!(seller_id = %seller_id, updated = total, "Store info synced");
        Ok(BulkSyncResult {
            updated_count: total,
        })
    }

    /// Bulk sync from the seller's current profile
    pub async fn repair_seller(&self, seller_id: &str) -> RepoResult<BulkSyncResult> {
        let profile = self
            .sellers
            .get_profile(seller_id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Seller {seller_id} not found")))?;

        let info = StoreInfo {
            user_name: profile.name,
            store_name: profile.store_name,
            city: profile.city,
            address: profile.address,
            phone: profile.phone,
        };
        self.bulk_sync_store_info(seller_id, &info).await
    }
}
