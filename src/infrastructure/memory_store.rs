use std::sync::{Arc, Mutex, MutexGuard};

use chrono::Utc;
use serde_json::Value;
use uuid::Uuid;

use crate::domain::document::StoredDocument;
use crate::domain::errors::DomainError;
use crate::domain::ports::{DocumentFilter, DocumentStore};

/// In-process test double for [`DocumentStore`], used by the unit tests and
/// the HTTP tests in `tests/`. Not meant for serving traffic: nothing is
/// persisted. All collections share one lock, which also makes
/// `insert_if_empty` atomic.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDocumentStore {
    documents: Arc<Mutex<Vec<StoredDocument>>>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<StoredDocument>>, DomainError> {
        self.documents
            .lock()
            .map_err(|_| DomainError::Internal("document store lock poisoned".to_string()))
    }
}

fn matches_filter(doc: &StoredDocument, filter: &DocumentFilter) -> bool {
    filter
        .iter()
        .all(|(key, expected)| doc.data.get(key) == Some(expected))
}

fn new_document(collection: &str, data: Value) -> StoredDocument {
    let now = Utc::now();
    StoredDocument {
        id: Uuid::new_v4(),
        collection: collection.to_string(),
        data,
        created_at: now,
        updated_at: now,
    }
}

impl DocumentStore for InMemoryDocumentStore {
    fn get_documents(
        &self,
        collection: &str,
        filter: &DocumentFilter,
        limit: i64,
    ) -> Result<Vec<StoredDocument>, DomainError> {
        let limit = usize::try_from(limit).unwrap_or(0);
        Ok(self
            .lock()?
            .iter()
            .filter(|doc| doc.collection == collection && matches_filter(doc, filter))
            .take(limit)
            .cloned()
            .collect())
    }

    fn create_document(
        &self,
        collection: &str,
        data: Value,
    ) -> Result<StoredDocument, DomainError> {
        let doc = new_document(collection, data);
        self.lock()?.push(doc.clone());
        Ok(doc)
    }

    fn insert_if_empty(
        &self,
        collection: &str,
        batch: Vec<Value>,
    ) -> Result<usize, DomainError> {
        let mut guard = self.lock()?;
        if guard.iter().any(|doc| doc.collection == collection) {
            return Ok(0);
        }
        let inserted = batch.len();
        guard.extend(
            batch
                .into_iter()
                .map(|data| new_document(collection, data)),
        );
        Ok(inserted)
    }

    fn collection_names(&self, limit: i64) -> Result<Vec<String>, DomainError> {
        let mut names: Vec<String> = self
            .lock()?
            .iter()
            .map(|doc| doc.collection.clone())
            .collect();
        names.sort();
        names.dedup();
        names.truncate(usize::try_from(limit).unwrap_or(0));
        Ok(names)
    }
}
