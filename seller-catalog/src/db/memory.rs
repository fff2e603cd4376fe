//! InMemoryDocumentStore - HashMap-backed document store for tests and local tooling.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::{Mutex, RwLock};
use serde_json::Value;

use super::{Document, DocumentStore, StoreError, StoreResult, StoredDocument};

/// Store operation, used for call accounting and failure injection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreOp {
    Create,
    Get,
    Update,
    Delete,
    Query,
    List,
}

/// Injected failure: an operation, optionally restricted to one document id
#[derive(Debug, Clone)]
struct FailRule {
    op: StoreOp,
    id: Option<String>,
}

/// In-memory document store.
///
/// Collections are `HashMap`s, so iteration order is arbitrary, like a
/// remote store queried without an ORDER BY. Clone-friendly via Arc; all
/// clones share storage, counters and injected failures.
#[derive(Clone, Default)]
pub struct InMemoryDocumentStore {
    collections: Arc<RwLock<HashMap<String, HashMap<String, Document>>>>,
    calls: Arc<Mutex<HashMap<StoreOp, usize>>>,
    failures: Arc<RwLock<Vec<FailRule>>>,
}

impl std::fmt::Debug for InMemoryDocumentStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let collections = self.collections.read();
        f.debug_struct("InMemoryDocumentStore")
            .field("collections", &collections.len())
            .field(
                "documents",
                &collections.values().map(HashMap::len).sum::<usize>(),
            )
            .finish()
    }
}

impl InMemoryDocumentStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a document under a caller-chosen id, bypassing accounting
    pub fn insert_with_id(&self, collection: &str, id: &str, document: Document) {
        self.collections
            .write()
            .entry(collection.to_string())
            .or_default()
            .insert(id.to_string(), document);
    }

    /// Raw document, bypassing accounting and failure injection
    pub fn peek(&self, collection: &str, id: &str) -> Option<Document> {
        self.collections
            .read()
            .get(collection)
            .and_then(|docs| docs.get(id))
            .cloned()
    }

    /// Number of documents in a collection
    pub fn len(&self, collection: &str) -> usize {
        self.collections
            .read()
            .get(collection)
            .map(HashMap::len)
            .unwrap_or(0)
    }

    pub fn is_empty(&self, collection: &str) -> bool {
        self.len(collection) == 0
    }

    /// How many times `op` has been called since creation or the last reset
    pub fn call_count(&self, op: StoreOp) -> usize {
        self.calls.lock().get(&op).copied().unwrap_or(0)
    }

    pub fn reset_call_counts(&self) {
        self.calls.lock().clear();
    }

    /// Make every call of `op` fail with a backend error
    pub fn fail_on(&self, op: StoreOp) {
        self.failures.write().push(FailRule { op, id: None });
    }

    /// Make calls of `op` against document `id` fail with a backend error
    pub fn fail_on_document(&self, op: StoreOp, id: &str) {
        self.failures.write().push(FailRule {
            op,
            id: Some(id.to_string()),
        });
    }

    pub fn clear_failures(&self) {
        self.failures.write().clear();
    }

    fn enter(&self, op: StoreOp, id: Option<&str>) -> StoreResult<()> {
        *self.calls.lock().entry(op).or_insert(0) += 1;

        let failing = self.failures.read().iter().any(|rule| {
            rule.op == op && (rule.id.is_none() || rule.id.as_deref() == id)
        });
        if failing {
            return Err(StoreError::Backend(format!("injected {op:?} failure")));
        }
        Ok(())
    }

    fn select(
        &self,
        collection: &str,
        predicate: impl Fn(&Document) -> bool,
    ) -> Vec<StoredDocument> {
        self.collections
            .read()
            .get(collection)
            .map(|docs| {
                docs.iter()
                    .filter(|(_, data)| predicate(data))
                    .map(|(id, data)| StoredDocument {
                        id: id.clone(),
                        data: data.clone(),
                    })
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn create(&self, collection: &str, document: Document) -> StoreResult<String> {
        self.enter(StoreOp::Create, None)?;
        let id = shared::util::new_document_id();
        self.insert_with_id(collection, &id, document);
        Ok(id)
    }

    async fn get(&self, collection: &str, id: &str) -> StoreResult<Option<StoredDocument>> {
        self.enter(StoreOp::Get, Some(id))?;
        Ok(self.peek(collection, id).map(|data| StoredDocument {
            id: id.to_string(),
            data,
        }))
    }

    async fn update(&self, collection: &str, id: &str, fields: Document) -> StoreResult<()> {
        self.enter(StoreOp::Update, Some(id))?;
        let mut collections = self.collections.write();
        let doc = collections
            .get_mut(collection)
            .and_then(|docs| docs.get_mut(id))
            .ok_or_else(|| StoreError::not_found(collection, id))?;
        doc.extend(fields);
        Ok(())
    }

    async fn delete(&self, collection: &str, id: &str) -> StoreResult<()> {
        self.enter(StoreOp::Delete, Some(id))?;
        if let Some(docs) = self.collections.write().get_mut(collection) {
            docs.remove(id);
        }
        Ok(())
    }

    async fn query_eq(
        &self,
        collection: &str,
        field: &str,
        value: Value,
    ) -> StoreResult<Vec<StoredDocument>> {
        self.enter(StoreOp::Query, None)?;
        Ok(self.select(collection, |doc| doc.get(field) == Some(&value)))
    }

    async fn list(&self, collection: &str) -> StoreResult<Vec<StoredDocument>> {
        self.enter(StoreOp::List, None)?;
        Ok(self.select(collection, |_| true))
    }
}
