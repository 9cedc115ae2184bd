use crate::domain::document::{to_document_data, StoredOrder};
use crate::domain::errors::DomainError;
use crate::domain::order::{Order, ORDER_COLLECTION};
use crate::domain::ports::SharedStore;

#[derive(Clone)]
pub struct OrderService {
    store: SharedStore,
}

impl OrderService {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// Store `order` with its subtotal recomputed from the items.
    pub fn create_order(&self, order: Order) -> Result<StoredOrder, DomainError> {
        let order = order.recompute()?;
        let doc = self
            .store
            .create_document(ORDER_COLLECTION, to_document_data(&order)?)?;
        log::info!(
            "Created order {} with {} item(s), subtotal {:.2}",
            doc.id,
            order.items.len(),
            order.subtotal
        );
        StoredOrder::try_from(doc)
    }
}
