use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;
use uuid::Uuid;

use super::errors::DomainError;
use super::order::Order;
use super::product::Product;

/// A record as held by a [`DocumentStore`](super::ports::DocumentStore).
#[derive(Debug, Clone, PartialEq)]
pub struct StoredDocument {
    pub id: Uuid,
    pub collection: String,
    pub data: Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl StoredDocument {
    fn decode<T: DeserializeOwned>(&self) -> Result<T, DomainError> {
        serde_json::from_value(self.data.clone()).map_err(|e| {
            DomainError::Internal(format!(
                "document {} in '{}' is malformed: {}",
                self.id, self.collection, e
            ))
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct StoredProduct {
    pub id: Uuid,
    #[serde(flatten)]
    pub product: Product,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<StoredDocument> for StoredProduct {
    type Error = DomainError;

    fn try_from(doc: StoredDocument) -> Result<Self, Self::Error> {
        Ok(Self {
            product: doc.decode()?,
            id: doc.id,
            created_at: doc.created_at,
            updated_at: doc.updated_at,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct StoredOrder {
    pub id: Uuid,
    #[serde(flatten)]
    pub order: Order,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<StoredDocument> for StoredOrder {
    type Error = DomainError;

    fn try_from(doc: StoredDocument) -> Result<Self, Self::Error> {
        Ok(Self {
            order: doc.decode()?,
            id: doc.id,
            created_at: doc.created_at,
            updated_at: doc.updated_at,
        })
    }
}

/// Serialize a domain value into the JSON object a store persists.
pub fn to_document_data<T: Serialize>(value: &T) -> Result<Value, DomainError> {
    serde_json::to_value(value).map_err(|e| DomainError::Internal(e.to_string()))
}
