//! Product Repository
//!
//! CRUD over the `products` collection. Every product carries a snapshot of
//! its seller's store identity, resolved with the blank-name fallback rule
//! on every create and update.
//!
//! Counter updates (`views`, `sold`, stock) are read-modify-write without a
//! version check: two concurrent writers can lose one update.

use std::sync::Arc;

use serde_json::{Value, json};
use shared::models::{
    Product, ProductCreate, ProductUpdate, SellerStats, StoreInfo, StoreSnapshot,
};
use shared::types::{PRODUCTS_COLLECTION, Timestamp};
use shared::util::now_millis;

use super::{RepoError, RepoResult, decode_all, from_stored, to_document};
use crate::db::{Document, DocumentStore, StoreError};
use crate::query;
use crate::services::CategoryProvider;
use crate::utils::validation;

// =============================================================================
// Product Repository
// =============================================================================

#[derive(Clone)]
pub struct ProductRepository {
    store: Arc<dyn DocumentStore>,
    categories: Arc<dyn CategoryProvider>,
    /// Substituted when a product is saved without images
    placeholder_image: String,
}

impl ProductRepository {
    pub fn new(
        store: Arc<dyn DocumentStore>,
        categories: Arc<dyn CategoryProvider>,
        placeholder_image: impl Into<String>,
    ) -> Self {
        Self {
            store,
            categories,
            placeholder_image: placeholder_image.into(),
        }
    }

    fn not_found(id: &str) -> RepoError {
        RepoError::NotFound(format!("Product {id} not found"))
    }

    /// Store-level NotFound on a write means the product vanished in between
    fn map_write_err(id: &str, err: StoreError) -> RepoError {
        match err {
            StoreError::NotFound { .. } => Self::not_found(id),
            other => other.into(),
        }
    }

    fn images_or_placeholder(&self, images: Vec<String>) -> Vec<String> {
        if images.is_empty() {
            vec![self.placeholder_image.clone()]
        } else {
            images
        }
    }

    // -------------------------------------------------------------------------
    // Create / update / delete
    // -------------------------------------------------------------------------

    /// Create a new product for `seller_id`
    pub async fn create(
        &self,
        data: ProductCreate,
        seller_id: &str,
        store_info: &StoreInfo,
    ) -> RepoResult<Product> {
        validation::validate_required_text(seller_id, "seller id", validation::MAX_NAME_LEN)?;
        validation::validate_product_create(&data, self.categories.as_ref())?;

        let now = now_millis();
        let mut product = Product {
            id: None,
            seller_id: seller_id.to_string(),
            name: data.name,
            description: data.description,
            price: data.price,
            stock: data.stock,
            category: data.category,
            images: self.images_or_placeholder(data.images),
            variants: data.variants,
            store: StoreSnapshot::resolve(store_info),
            created_at: Some(now),
            updated_at: Some(now),
            views: 0,
            sold: 0,
            rating: 0.0,
            review_count: 0,
            is_active: true,
        };

        let id = self
            .store
            .create(PRODUCTS_COLLECTION, to_document(&product)?)
            .await?;
        tracing::debug!(product_id = %id, seller_id = %seller_id, "Product created");

        product.id = Some(id);
        Ok(product)
    }

    /// Merge `patch` into an existing product and refresh its store snapshot.
    ///
    /// Never creates a product: an unknown id fails with NotFound.
    pub async fn update(
        &self,
        id: &str,
        mut patch: ProductUpdate,
        store_info: &StoreInfo,
    ) -> RepoResult<Product> {
        validation::validate_product_update(&patch, self.categories.as_ref())?;
        if let Some(images) = patch.images.take() {
            patch.images = Some(self.images_or_placeholder(images));
        }

        let mut product = self.get_by_id(id).await?;

        let snapshot = StoreSnapshot::resolve(store_info);
        let now = now_millis();

        let mut fields = to_document(&patch)?;
        fields.extend(to_document(&snapshot)?);
        fields.insert("updated_at".to_string(), json!(now));

        self.store
            .update(PRODUCTS_COLLECTION, id, fields)
            .await
            .map_err(|e| Self::map_write_err(id, e))?;

        patch.apply_to(&mut product);
        product.store = snapshot;
        product.updated_at = Some(now);
        Ok(product)
    }

    /// Hard delete. Deleting an unknown id succeeds.
    pub async fn delete(&self, id: &str) -> RepoResult<()> {
        self.store.delete(PRODUCTS_COLLECTION, id).await?;
        tracing::debug!(product_id = %id, "Product deleted");
        Ok(())
    }

    /// Toggle the soft-delete flag
    pub async fn set_active(&self, id: &str, active: bool) -> RepoResult<Product> {
        let mut product = self.get_by_id(id).await?;
        let now = now_millis();

        let mut fields = Document::new();
        fields.insert("is_active".to_string(), Value::Bool(active));
        fields.insert("updated_at".to_string(), json!(now));
        self.store
            .update(PRODUCTS_COLLECTION, id, fields)
            .await
            .map_err(|e| Self::map_write_err(id, e))?;

        product.is_active = active;
        product.updated_at = Some(now);
        Ok(product)
    }

    /// Overwrite the four snapshot fields and bump `updated_at`
    pub async fn write_store_snapshot(
        &self,
        id: &str,
        snapshot: &StoreSnapshot,
        updated_at: Timestamp,
    ) -> RepoResult<()> {
        let mut fields = to_document(snapshot)?;
        fields.insert("updated_at".to_string(), json!(updated_at));
        self.store
            .update(PRODUCTS_COLLECTION, id, fields)
            .await
            .map_err(|e| Self::map_write_err(id, e))
    }

    // -------------------------------------------------------------------------
    // Reads
    // -------------------------------------------------------------------------

    /// Find product by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Product>> {
        self.store
            .get(PRODUCTS_COLLECTION, id)
            .await?
            .map(from_stored)
            .transpose()
    }

    /// Product by id, NotFound if absent
    pub async fn get_by_id(&self, id: &str) -> RepoResult<Product> {
        self.find_by_id(id).await?.ok_or_else(|| Self::not_found(id))
    }

    /// Every product of a seller, soft-deleted ones included, unordered
    pub async fn find_all_by_seller(&self, seller_id: &str) -> RepoResult<Vec<Product>> {
        let docs = self
            .store
            .query_eq(PRODUCTS_COLLECTION, "seller_id", Value::from(seller_id))
            .await?;
        Ok(decode_all(PRODUCTS_COLLECTION, docs))
    }

    /// Active products of a seller, newest first
    pub async fn list_by_seller(&self, seller_id: &str) -> RepoResult<Vec<Product>> {
        let products = self.find_all_by_seller(seller_id).await?;
        Ok(query::active_newest_first(products))
    }

    /// All active products, newest first
    pub async fn list_all(&self) -> RepoResult<Vec<Product>> {
        let docs = self.store.list(PRODUCTS_COLLECTION).await?;
        Ok(query::active_newest_first(decode_all(
            PRODUCTS_COLLECTION,
            docs,
        )))
    }

    /// Active products of a category, newest first
    pub async fn list_by_category(&self, category: &str) -> RepoResult<Vec<Product>> {
        let docs = self
            .store
            .query_eq(PRODUCTS_COLLECTION, "category", Value::from(category))
            .await?;
        Ok(query::active_newest_first(decode_all(
            PRODUCTS_COLLECTION,
            docs,
        )))
    }

    /// Text search over active products, name matches first
    pub async fn search(&self, query_text: &str) -> RepoResult<Vec<Product>> {
        let docs = self.store.list(PRODUCTS_COLLECTION).await?;
        Ok(query::rank_search(
            decode_all(PRODUCTS_COLLECTION, docs),
            query_text,
        ))
    }

    /// Dashboard counters over the seller's active products
    pub async fn seller_stats(&self, seller_id: &str) -> RepoResult<SellerStats> {
        let products = self.list_by_seller(seller_id).await?;
        Ok(products
            .iter()
            .fold(SellerStats::default(), |mut stats, p| {
                stats.product_count += 1;
                stats.total_stock = stats.total_stock.saturating_add(p.stock);
                stats.total_sold = stats.total_sold.saturating_add(p.sold);
                stats.total_views = stats.total_views.saturating_add(p.views);
                if p.stock == 0 {
                    stats.out_of_stock += 1;
                }
                stats
            }))
    }

    // -------------------------------------------------------------------------
    // Counters
    // -------------------------------------------------------------------------

    /// Read-then-write `views + 1`
    pub async fn increment_views(&self, id: &str) -> RepoResult<()> {
        let product = self.get_by_id(id).await?;

        let mut fields = Document::new();
        fields.insert("views".to_string(), json!(product.views.saturating_add(1)));
        self.store
            .update(PRODUCTS_COLLECTION, id, fields)
            .await
            .map_err(|e| Self::map_write_err(id, e))
    }

    /// Take `quantity` units out of stock after a sale.
    ///
    /// With a variant name and a product that has variants, only that
    /// variant's stock changes. Otherwise the top-level stock goes down and
    /// `sold` goes up by the requested quantity. Stock never goes below zero
    /// and counters saturate at `i64::MAX`.
    pub async fn reduce_stock(
        &self,
        id: &str,
        quantity: i64,
        variant_name: Option<&str>,
    ) -> RepoResult<()> {
        validation::validate_stock(quantity, "quantity")?;
        let mut product = self.get_by_id(id).await?;

        let mut fields = Document::new();
        match variant_name {
            Some(name) if !product.variants.is_empty() => {
                let Some(variant) = product.variant_mut(name) else {
                    tracing::warn!(product_id = %id, variant = %name, "Variant not found, stock unchanged");
                    return Ok(());
                };
                variant.stock = variant.stock.saturating_sub(quantity).max(0);
                fields.insert("variants".to_string(), serde_json::to_value(&product.variants)?);
            }
            _ => {
                fields.insert("stock".to_string(), json!(product.stock.saturating_sub(quantity).max(0)));
                fields.insert("sold".to_string(), json!(product.sold.saturating_add(quantity)));
            }
        }
        fields.insert("updated_at".to_string(), json!(now_millis()));

        self.store
            .update(PRODUCTS_COLLECTION, id, fields)
            .await
            .map_err(|e| Self::map_write_err(id, e))
    }
}
