use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::ports::SharedStore;

const MAX_COLLECTIONS: i64 = 10;
const MAX_ERROR_CHARS: usize = 50;

/// Whether the store-related environment variables are set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvStatus {
    pub database_url: bool,
    pub database_name: bool,
}

impl EnvStatus {
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var_os("DATABASE_URL").is_some(),
            database_name: std::env::var_os("DATABASE_NAME").is_some(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct DiagnosticsReport {
    pub backend: String,
    pub database: String,
    pub database_url: String,
    pub database_name: String,
    pub connection_status: String,
    pub collections: Vec<String>,
}

#[derive(Clone)]
pub struct DiagnosticsService {
    store: SharedStore,
}

impl DiagnosticsService {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// Ask the store for its collections. Never fails: store errors end up in the report.
    pub fn report(&self, env: EnvStatus) -> DiagnosticsReport {
        let (database, collections) = match self.store.collection_names(MAX_COLLECTIONS) {
            Ok(collections) => ("✅ Connected & Working".to_string(), collections),
            Err(e) => {
                log::warn!("Store introspection failed: {}", e);
                (
                    format!("⚠️  Connected but Error: {}", truncate(&e.to_string())),
                    Vec::new(),
                )
            }
        };

        DiagnosticsReport {
            backend: "✅ Running".to_string(),
            database,
            database_url: set_marker(env.database_url),
            database_name: set_marker(env.database_name),
            connection_status: "Connected".to_string(),
            collections,
        }
    }
}

fn set_marker(set: bool) -> String {
    let marker = if set { "✅ Set" } else { "❌ Not Set" };
    marker.to_string()
}

fn truncate(message: &str) -> String {
    message.chars().take(MAX_ERROR_CHARS).collect()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::{json, Value};

    use super::*;
    use crate::domain::document::StoredDocument;
    use crate::domain::errors::DomainError;
    use crate::domain::ports::{DocumentFilter, DocumentStore};
    use crate::infrastructure::memory_store::InMemoryDocumentStore;

    struct BrokenStore;

    impl DocumentStore for BrokenStore {
        fn get_documents(
            &self,
            _: &str,
            _: &DocumentFilter,
            _: i64,
        ) -> Result<Vec<StoredDocument>, DomainError> {
            Err(DomainError::Internal("down".to_string()))
        }

        fn create_document(&self, _: &str, _: Value) -> Result<StoredDocument, DomainError> {
            Err(DomainError::Internal("down".to_string()))
        }

        fn insert_if_empty(&self, _: &str, _: Vec<Value>) -> Result<usize, DomainError> {
            Err(DomainError::Internal("down".to_string()))
        }

        fn collection_names(&self, _: i64) -> Result<Vec<String>, DomainError> {
            Err(DomainError::Internal(
                "connection refused by server at 10.0.0.1:5432 after 30 seconds".to_string(),
            ))
        }
    }

    const ALL_SET: EnvStatus = EnvStatus {
        database_url: true,
        database_name: true,
    };

    #[test]
    fn healthy_store_lists_collections() {
        let store = Arc::new(InMemoryDocumentStore::new());
        store
            .create_document("product", json!({"title": "x"}))
            .expect("insert");
        store
            .create_document("order", json!({"items": []}))
            .expect("insert");

        let report = DiagnosticsService::new(store).report(ALL_SET);

        assert_eq!(report.database, "✅ Connected & Working");
        assert_eq!(report.collections, vec!["order", "product"]);
        assert_eq!(report.database_url, "✅ Set");
        assert_eq!(report.connection_status, "Connected");
    }

    #[test]
    fn store_error_is_truncated_to_fifty_chars() {
        let report = DiagnosticsService::new(Arc::new(BrokenStore)).report(ALL_SET);

        let detail = report
            .database
            .strip_prefix("⚠️  Connected but Error: ")
            .expect("error prefix");
        assert_eq!(detail.chars().count(), MAX_ERROR_CHARS);
        assert!(detail.starts_with("Internal error: connection refused"));
        assert!(report.collections.is_empty());
    }

    #[test]
    fn unset_variables_are_reported() {
        let report = DiagnosticsService::new(Arc::new(InMemoryDocumentStore::new())).report(
            EnvStatus {
                database_url: false,
                database_name: true,
            },
        );

        assert_eq!(report.database_url, "❌ Not Set");
        assert_eq!(report.database_name, "✅ Set");
        assert_eq!(report.backend, "✅ Running");
    }

    #[test]
    fn truncate_counts_chars_not_bytes() {
        let message = "é".repeat(60);
        assert_eq!(truncate(&message).chars().count(), MAX_ERROR_CHARS);
    }
}
