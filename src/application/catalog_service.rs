use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

use crate::domain::catalog::demo_products;
use crate::domain::document::{to_document_data, StoredProduct};
use crate::domain::errors::DomainError;
use crate::domain::ports::{DocumentFilter, SharedStore};
use crate::domain::product::{Product, PRODUCT_COLLECTION, PRODUCT_LIST_LIMIT};

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct SeedOutcome {
    pub inserted: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Clone)]
pub struct CatalogService {
    store: SharedStore,
}

impl CatalogService {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// At most [`PRODUCT_LIST_LIMIT`] products, optionally restricted to one
    /// category. An empty category is treated as no filter.
    pub fn list_products(&self, category: Option<&str>) -> Result<Vec<StoredProduct>, DomainError> {
        let mut filter = DocumentFilter::new();
        if let Some(category) = category.filter(|c| !c.is_empty()) {
            filter.insert("category".to_string(), Value::String(category.to_string()));
        }
        self.store
            .get_documents(PRODUCT_COLLECTION, &filter, PRODUCT_LIST_LIMIT)?
            .into_iter()
            .map(StoredProduct::try_from)
            .collect()
    }

    pub fn create_product(&self, product: Product) -> Result<StoredProduct, DomainError> {
        product.validate()?;
        let doc = self
            .store
            .create_document(PRODUCT_COLLECTION, to_document_data(&product)?)?;
        log::info!("Created product {} ({})", doc.id, product.title);
        StoredProduct::try_from(doc)
    }

    /// Insert the demo catalogue unless products already exist.
    pub fn seed_products(&self) -> Result<SeedOutcome, DomainError> {
        let documents = demo_products()
            .iter()
            .map(to_document_data)
            .collect::<Result<Vec<_>, _>>()?;

        let inserted = self.store.insert_if_empty(PRODUCT_COLLECTION, documents)?;
        if inserted == 0 {
            log::info!("Product collection not empty, skipping seed");
            return Ok(SeedOutcome {
                inserted,
                message: Some("Products already seeded".to_string()),
            });
        }

        log::info!("Seeded {} demo products", inserted);
        Ok(SeedOutcome {
            inserted,
            message: None,
        })
    }
}
