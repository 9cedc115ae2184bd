use utoipa::OpenApi;

use crate::application::catalog_service::SeedOutcome;
use crate::application::diagnostics::DiagnosticsReport;
use crate::domain::document::{StoredOrder, StoredProduct};
use crate::domain::order::{Order, OrderItem};
use crate::domain::product::Product;
use crate::handlers;
use crate::handlers::system::{SchemaMap, StatusMessage};

#[derive(OpenApi)]
#[openapi(
    info(title = "Chips Commerce API"),
    paths(
        handlers::system::read_root,
        handlers::system::get_schema,
        handlers::system::test_database,
        handlers::products::list_products,
        handlers::products::create_product,
        handlers::products::seed_products,
        handlers::orders::create_order,
    ),
    components(schemas(
        Product,
        StoredProduct,
        OrderItem,
        Order,
        StoredOrder,
        SeedOutcome,
        DiagnosticsReport,
        StatusMessage,
        SchemaMap,
    )),
    tags(
        (name = "products", description = "Product catalogue"),
        (name = "orders", description = "Order placement"),
        (name = "system", description = "Service status and diagnostics"),
    )
)]
pub struct ApiDoc;
