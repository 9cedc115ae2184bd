use std::sync::Arc;

use serde_json::{Map, Value};

use super::document::StoredDocument;
use super::errors::DomainError;

/// Equality filter on top-level document fields. Empty matches everything.
pub type DocumentFilter = Map<String, Value>;

pub trait DocumentStore: Send + Sync + 'static {
    /// Up to `limit` documents of `collection` matching `filter`, oldest first.
    fn get_documents(
        &self,
        collection: &str,
        filter: &DocumentFilter,
        limit: i64,
    ) -> Result<Vec<StoredDocument>, DomainError>;

    fn create_document(&self, collection: &str, data: Value)
        -> Result<StoredDocument, DomainError>;

    /// Insert `documents` only if `collection` holds nothing yet, atomically
    /// with respect to other callers. Returns how many were inserted.
    fn insert_if_empty(&self, collection: &str, documents: Vec<Value>)
        -> Result<usize, DomainError>;

    /// Distinct collection names currently holding documents.
    fn collection_names(&self, limit: i64) -> Result<Vec<String>, DomainError>;
}

pub type SharedStore = Arc<dyn DocumentStore>;
