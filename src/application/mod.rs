pub mod catalog_service;
pub mod diagnostics;
pub mod order_service;
