use thiserror::Error;

pub const EMPTY_ORDER_MESSAGE: &str = "Order must contain at least one item";

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{}", EMPTY_ORDER_MESSAGE)]
    EmptyOrder,
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Internal error: {0}")]
    Internal(String),
}
