use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::errors::DomainError;

/// Name of the collection products are stored in.
pub const PRODUCT_COLLECTION: &str = "product";

/// Upper bound on the number of products returned by a single listing.
pub const PRODUCT_LIST_LIMIT: i64 = 100;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Unit price, e.g. 2.99
    pub price: f64,
    pub category: String,
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub weight_grams: Option<i32>,
}

fn default_in_stock() -> bool {
    true
}

impl Product {
    pub fn validate(&self) -> Result<(), DomainError> {
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(DomainError::InvalidInput(format!(
                "price must be a non-negative number, got {}",
                self.price
            )));
        }
        if let Some(rating) = self.rating {
            if !rating.is_finite() {
                return Err(DomainError::InvalidInput(
                    "rating must be a finite number".to_string(),
                ));
            }
        }
        Ok(())
    }
}
