use std::str::FromStr;

use bigdecimal::{BigDecimal, ToPrimitive};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::errors::DomainError;

/// Name of the collection orders are stored in.
pub const ORDER_COLLECTION: &str = "order";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OrderItem {
    /// Id of the ordered product as returned by the catalogue.
    pub product_id: String,
    pub price: f64,
    pub quantity: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Order {
    pub items: Vec<OrderItem>,
    /// Ignored on input; always recomputed from the items.
    #[serde(default)]
    pub subtotal: f64,
}

impl Order {
    /// Checks the order and overwrites `subtotal` with the recomputed value.
    pub fn recompute(mut self) -> Result<Self, DomainError> {
        if self.items.is_empty() {
            return Err(DomainError::EmptyOrder);
        }
        for item in &self.items {
            item.validate()?;
        }
        self.subtotal = recompute_subtotal(&self.items)?;
        Ok(self)
    }
}

impl OrderItem {
    fn validate(&self) -> Result<(), DomainError> {
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(DomainError::InvalidInput(format!(
                "price for product '{}' must be a non-negative number",
                self.product_id
            )));
        }
        if self.quantity < 1 {
            return Err(DomainError::InvalidInput(format!(
                "quantity for product '{}' must be at least 1",
                self.product_id
            )));
        }
        Ok(())
    }
}

/// `round(sum(price * quantity), 2)`, summed in decimal so that e.g.
/// 2.99 * 2 + 3.49 comes out as exactly 9.47.
pub fn recompute_subtotal(items: &[OrderItem]) -> Result<f64, DomainError> {
    let mut total = BigDecimal::from(0);
    for item in items {
        // f64 Display yields the shortest string that round-trips.
        let price = BigDecimal::from_str(&item.price.to_string()).map_err(|e| {
            DomainError::InvalidInput(format!("Invalid price '{}': {}", item.price, e))
        })?;
        total += price * BigDecimal::from(item.quantity);
    }
    match total.round(2).to_f64() {
        Some(subtotal) if subtotal.is_finite() => Ok(subtotal),
        _ => Err(DomainError::InvalidInput(format!(
            "subtotal {} is out of range",
            total
        ))),
    }
}
