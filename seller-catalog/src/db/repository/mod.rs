//! Repository Module
//!
//! Typed access to the document store collections.

pub mod product;
pub mod seller;

// Re-exports
pub use product::ProductRepository;
pub use seller::{SellerProfileStore, SellerRepository};

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use super::{Document, StoreError, StoredDocument};

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<StoreError> for RepoError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { collection, id } => {
                RepoError::NotFound(format!("{collection}/{id}"))
            }
            other => RepoError::Database(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for RepoError {
    fn from(err: serde_json::Error) -> Self {
        RepoError::Database(format!("Document mapping failed: {err}"))
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Serialize a model into a top-level field map
pub(crate) fn to_document<T: Serialize>(model: &T) -> RepoResult<Document> {
    match serde_json::to_value(model)? {
        Value::Object(map) => Ok(map),
        other => Err(RepoError::Database(format!(
            "Expected an object document, got {other}"
        ))),
    }
}

/// Deserialize a stored document, injecting its id under `"id"`
pub(crate) fn from_stored<T: DeserializeOwned>(doc: StoredDocument) -> RepoResult<T> {
    let StoredDocument { id, mut data } = doc;
    data.insert("id".to_string(), Value::String(id));
    Ok(serde_json::from_value(Value::Object(data))?)
}

/// Decode a result set, skipping documents that no longer match the model
pub(crate) fn decode_all<T: DeserializeOwned>(collection: &str, docs: Vec<StoredDocument>) -> Vec<T> {
    docs.into_iter()
        .filter_map(|doc| {
            let id = doc.id.clone();
            from_stored(doc)
                .inspect_err(|e| {
                    tracing::warn!(collection, doc_id = %id, error = %e, "Skipping malformed document");
                })
                .ok()
        })
        .collect()
}
