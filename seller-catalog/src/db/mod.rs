//! Database Module
//!
//! Document store abstraction used by the repositories, plus its backends:
//! embedded SurrealDB for real deployments and an in-memory map for tests
//! and local tooling.
//!
//! The store offers single-field equality queries and full scans only: no
//! composite indexes, no server-side ordering. Filtering and
//! sorting beyond that happen in [`crate::query`].

pub mod memory;
pub mod repository;
pub mod surreal;

pub use memory::{InMemoryDocumentStore, StoreOp};
pub use surreal::SurrealDocumentStore;

use async_trait::async_trait;
use serde_json::{Map, Value};
use surrealdb::Surreal;
use surrealdb::engine::local::{Db, RocksDb};
use thiserror::Error;

/// Schema-less document body (top-level field map)
pub type Document = Map<String, Value>;

/// Document together with its store-assigned id
#[derive(Debug, Clone, PartialEq)]
pub struct StoredDocument {
    pub id: String,
    pub data: Document,
}

/// Document store error types
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Document not found: {collection}/{id}")]
    NotFound { collection: String, id: String },

    #[error("Document serialization error: {0}")]
    Serde(String),

    #[error("Storage backend error: {0}")]
    Backend(String),
}

impl StoreError {
    pub fn not_found(collection: &str, id: &str) -> Self {
        Self::NotFound {
            collection: collection.to_string(),
            id: id.to_string(),
        }
    }
}

impl From<surrealdb::Error> for StoreError {
    fn from(err: surrealdb::Error) -> Self {
        StoreError::Backend(err.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serde(err.to_string())
    }
}

/// Result type for document store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Minimal document-store client
///
/// Mirrors what a hosted document database offers without composite
/// indexes: keyed CRUD, single-field equality queries and full scans, all
/// returning documents in no particular order.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Insert a new document and return the generated id
    async fn create(&self, collection: &str, document: Document) -> StoreResult<String>;

    /// Fetch a document by id
    async fn get(&self, collection: &str, id: &str) -> StoreResult<Option<StoredDocument>>;

    /// Merge `fields` into an existing document.
    ///
    /// Fails with [`StoreError::NotFound`] if the document does not exist;
    /// never creates one.
    async fn update(&self, collection: &str, id: &str, fields: Document) -> StoreResult<()>;

    /// Remove a document. Removing an absent id is not an error.
    async fn delete(&self, collection: &str, id: &str) -> StoreResult<()>;

    /// Documents whose top-level `field` equals `value`, unordered
    async fn query_eq(
        &self,
        collection: &str,
        field: &str,
        value: Value,
    ) -> StoreResult<Vec<StoredDocument>>;

    /// Every document of the collection, unordered
    async fn list(&self, collection: &str) -> StoreResult<Vec<StoredDocument>>;
}

/// Database service, owns the embedded SurrealDB handle
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open (or create) the RocksDB-backed database at `db_path`
    pub async fn new(db_path: &str, namespace: &str, database: &str) -> StoreResult<Self> {
        let db: Surreal<Db> = Surreal::new::<RocksDb>(db_path)
            .await
            .map_err(|e| StoreError::Backend(format!("Failed to open database: {e}")))?;

        db.use_ns(namespace)
            .use_db(database)
            .await
            .map_err(|e| StoreError::Backend(format!("Failed to select namespace: {e}")))?;

        tracing::info!(
            path = %db_path,
            namespace = %namespace,
            database = %database,
            "Database connection established (SurrealDB, RocksDB)"
        );

        Ok(Self { db })
    }

    /// Document store view over this database
    pub fn document_store(&self) -> SurrealDocumentStore {
        SurrealDocumentStore::new(self.db.clone())
    }
}
