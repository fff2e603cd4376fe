//! Product Service - the public face of the catalog
//!
//! Wraps [`ProductRepository`] and [`StoreSyncService`] and answers every
//! call with an [`AppResponse`] envelope. Nothing below this layer leaks
//! out: errors become fixed, caller-safe messages.

use std::sync::Arc;

use shared::error::ErrorCode;
use shared::models::{
    BulkSyncResult, Product, ProductCreate, ProductUpdate, SellerStats, StoreInfo,
};
use shared::response::AppResponse;

use super::StoreSyncService;
use crate::db::repository::{ProductRepository, RepoResult, SellerProfileStore};
use crate::utils::error::{messages, product_error, repo_to_app_error};

/// Wrap a repository result for a product operation
fn respond<T>(result: RepoResult<T>, failure: &str) -> AppResponse<T> {
    result.map_err(|e| product_error(e, failure)).into()
}

#[derive(Clone)]
pub struct ProductService {
    products: ProductRepository,
    sync: StoreSyncService,
}

impl ProductService {
    pub fn new(products: ProductRepository, sellers: Arc<dyn SellerProfileStore>) -> Self {
        let sync = StoreSyncService::new(products.clone(), sellers);
        Self { products, sync }
    }

    pub fn repository(&self) -> &ProductRepository {
        &self.products
    }

    pub fn store_sync(&self) -> &StoreSyncService {
        &self.sync
    }

    // ========== Writes ==========

    pub async fn create_product(
        &self,
        data: ProductCreate,
        seller_id: &str,
        store_info: &StoreInfo,
    ) -> AppResponse<Product> {
        respond(
            self.products.create(data, seller_id, store_info).await,
            messages::CREATE_FAILED,
        )
    }

    pub async fn update_product(
        &self,
        product_id: &str,
        patch: ProductUpdate,
        store_info: &StoreInfo,
    ) -> AppResponse<Product> {
        respond(
            self.products.update(product_id, patch, store_info).await,
            messages::UPDATE_FAILED,
        )
    }

    pub async fn delete_product(&self, product_id: &str) -> AppResponse<()> {
        respond(self.products.delete(product_id).await, messages::DELETE_FAILED)
    }

    /// Soft delete / restore
    pub async fn set_product_active(&self, product_id: &str, active: bool) -> AppResponse<Product> {
        respond(
            self.products.set_active(product_id, active).await,
            messages::UPDATE_FAILED,
        )
    }

    pub async fn reduce_stock(
        &self,
        product_id: &str,
        quantity: i64,
        variant_name: Option<&str>,
    ) -> AppResponse<()> {
        respond(
            self.products.reduce_stock(product_id, quantity, variant_name).await,
            messages::STOCK_FAILED,
        )
    }

    /// Best effort: failures are logged, never reported
    pub async fn increment_views(&self, product_id: &str) {
        if let Err(e) = self.products.increment_views(product_id).await {
            tracing::warn!(product_id = %product_id, error = %e, "Failed to increment views");
        }
    }

    // ========== Reads ==========

    pub async fn get_product(&self, product_id: &str) -> AppResponse<Product> {
        respond(self.products.get_by_id(product_id).await, messages::LOAD_FAILED)
    }

    /// Product with its store snapshot checked against the seller profile
    pub async fn get_product_with_fresh_seller_info(&self, product_id: &str) -> AppResponse<Product> {
        respond(
            self.sync.product_with_fresh_seller_info(product_id).await,
            messages::LOAD_FAILED,
        )
    }

    pub async fn get_seller_products(&self, seller_id: &str) -> AppResponse<Vec<Product>> {
        respond(self.products.list_by_seller(seller_id).await, messages::LIST_FAILED)
    }

    pub async fn get_all_products(&self) -> AppResponse<Vec<Product>> {
        respond(self.products.list_all().await, messages::LIST_FAILED)
    }

    pub async fn get_products_by_category(&self, category: &str) -> AppResponse<Vec<Product>> {
        respond(self.products.list_by_category(category).await, messages::LIST_FAILED)
    }

    pub async fn search_products(&self, query: &str) -> AppResponse<Vec<Product>> {
        respond(self.products.search(query).await, messages::SEARCH_FAILED)
    }

    pub async fn get_seller_stats(&self, seller_id: &str) -> AppResponse<SellerStats> {
        respond(self.products.seller_stats(seller_id).await, messages::STATS_FAILED)
    }

    // ========== Store sync ==========

    pub async fn bulk_sync_store_info(
        &self,
        seller_id: &str,
        store_info: &StoreInfo,
    ) -> AppResponse<BulkSyncResult> {
        respond(
            self.sync.bulk_sync_store_info(seller_id, store_info).await,
            messages::SYNC_FAILED,
        )
    }

    /// Re-sync every product of a seller from the stored profile
    pub async fn repair_seller(&self, seller_id: &str) -> AppResponse<BulkSyncResult> {
        self.sync
            .repair_seller(seller_id)
            .await
            .map_err(|e| repo_to_app_error(e, ErrorCode::SellerNotFound, messages::SYNC_FAILED))
            .into()
    }
}
