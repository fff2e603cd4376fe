//! SurrealDocumentStore - embedded SurrealDB behind the document store trait
//!
//! Every collection is a schemaless table; the document id is the record
//! key. Queries go through SurrealQL with `type::thing` / `type::table` /
//! `type::field` so collection and field names are bound, never spliced.

use async_trait::async_trait;
use serde_json::Value;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{Document, DocumentStore, StoreError, StoreResult, StoredDocument};

/// Alias under which the record key is projected in scans
const KEY_FIELD: &str = "doc_key";

#[derive(Clone)]
pub struct SurrealDocumentStore {
    db: Surreal<Db>,
}

impl SurrealDocumentStore {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }

    /// Split the projected key out of a scanned row
    fn into_stored(row: Value) -> StoreResult<StoredDocument> {
        let Value::Object(mut data) = row else {
            return Err(StoreError::Serde("expected an object row".to_string()));
        };
        let id = match data.remove(KEY_FIELD) {
            Some(Value::String(id)) => id,
            Some(other) => other.to_string(),
            None => return Err(StoreError::Serde("row without record key".to_string())),
        };
        Ok(StoredDocument { id, data })
    }

    fn into_document(row: Value) -> StoreResult<Document> {
        match row {
            Value::Object(data) => Ok(data),
            _ => Err(StoreError::Serde("expected an object row".to_string())),
        }
    }
}

#[async_trait]
impl DocumentStore for SurrealDocumentStore {
    async fn create(&self, collection: &str, document: Document) -> StoreResult<String> {
        let id = shared::util::new_document_id();
        self.db
            .query("CREATE type::thing($tb, $key) CONTENT $data RETURN NONE")
            .bind(("tb", collection.to_string()))
            .bind(("key", id.clone()))
            .bind(("data", Value::Object(document)))
            .await?
            .check()?;
        Ok(id)
    }

    async fn get(&self, collection: &str, id: &str) -> StoreResult<Option<StoredDocument>> {
        let mut result = self
            .db
            .query("SELECT * OMIT id FROM type::thing($tb, $key)")
            .bind(("tb", collection.to_string()))
            .bind(("key", id.to_string()))
            .await?;
        let rows: Vec<Value> = result.take(0)?;

        rows.into_iter()
            .next()
            .map(|row| {
                Self::into_document(row).map(|data| StoredDocument {
                    id: id.to_string(),
                    data,
                })
            })
            .transpose()
    }

    async fn update(&self, collection: &str, id: &str, fields: Document) -> StoreResult<()> {
        // UPDATE on a missing record returns no rows and creates nothing
        let mut result = self
            .db
            .query("UPDATE type::thing($tb, $key) MERGE $data RETURN AFTER")
            .bind(("tb", collection.to_string()))
            .bind(("key", id.to_string()))
            .bind(("data", Value::Object(fields)))
            .await?;
        let rows: Vec<Value> = result.take(0)?;

        if rows.is_empty() {
            return Err(StoreError::not_found(collection, id));
        }
        Ok(())
    }

    async fn delete(&self, collection: &str, id: &str) -> StoreResult<()> {
        self.db
            .query("DELETE type::thing($tb, $key)")
            .bind(("tb", collection.to_string()))
            .bind(("key", id.to_string()))
            .await?
            .check()?;
        Ok(())
    }

    async fn query_eq(
        &self,
        collection: &str,
        field: &str,
        value: Value,
    ) -> StoreResult<Vec<StoredDocument>> {
        let mut result = self
            .db
            .query(
                "SELECT *, record::id(id) AS doc_key OMIT id FROM type::table($tb) \
                 WHERE type::field($field) = $value",
            )
            .bind(("tb", collection.to_string()))
            .bind(("field", field.to_string()))
            .bind(("value", value))
            .await?;
        let rows: Vec<Value> = result.take(0)?;
        rows.into_iter().map(Self::into_stored).collect()
    }

    async fn list(&self, collection: &str) -> StoreResult<Vec<StoredDocument>> {
        let mut result = self
            .db
            .query("SELECT *, record::id(id) AS doc_key OMIT id FROM type::table($tb)")
            .bind(("tb", collection.to_string()))
            .await?;
        let rows: Vec<Value> = result.take(0)?;
        rows.into_iter().map(Self::into_stored).collect()
    }
}
