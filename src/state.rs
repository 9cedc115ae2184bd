use crate::application::catalog_service::CatalogService;
use crate::application::diagnostics::DiagnosticsService;
use crate::application::order_service::OrderService;
use crate::domain::ports::SharedStore;

/// Shared by every worker; cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    pub catalog: CatalogService,
    pub orders: OrderService,
    pub diagnostics: DiagnosticsService,
}

impl AppState {
    pub fn new(store: SharedStore) -> Self {
        Self {
            catalog: CatalogService::new(store.clone()),
            orders: OrderService::new(store.clone()),
            diagnostics: DiagnosticsService::new(store),
        }
    }
}
