//! 目录服务状态 - 装配存储、仓库与服务

use std::sync::Arc;

use crate::core::Config;
use crate::db::repository::{ProductRepository, SellerRepository};
use crate::db::{DbService, DocumentStore};
use crate::services::{ProductService, StaticCategoryProvider};

/// Wired-up catalog services over one document store
#[derive(Clone)]
pub struct CatalogState {
    pub config: Config,
    pub store: Arc<dyn DocumentStore>,
    pub products: ProductService,
}

impl CatalogState {
    /// Open the embedded database described by `config` and wire the services
    pub async fn initialize(config: &Config) -> anyhow::Result<Self> {
        std::fs::create_dir_all(&config.data_dir)?;

        let db_service = DbService::new(&config.data_dir, &config.db_namespace, &config.db_name).await?;
        let store: Arc<dyn DocumentStore> = Arc::new(db_service.document_store());

        Ok(Self::with_store(config.clone(), store))
    }

    /// Wire the services over an existing store (in-memory store in tests)
    pub fn with_store(config: Config, store: Arc<dyn DocumentStore>) -> Self {
        let categories = Arc::new(StaticCategoryProvider::new(config.categories.iter()));
        let repository =
            ProductRepository::new(store.clone(), categories, config.placeholder_image.clone());
        let sellers = Arc::new(SellerRepository::new(store.clone()));

        Self {
            products: ProductService::new(repository, sellers),
            store,
            config,
        }
    }
}
