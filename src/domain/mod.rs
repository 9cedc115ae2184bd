pub mod catalog;
pub mod document;
pub mod errors;
pub mod order;
pub mod ports;
pub mod product;
