use actix_web::{web, HttpResponse};

use crate::domain::document::StoredOrder;
use crate::domain::order::Order;
use crate::errors::AppError;
use crate::state::AppState;

/// POST /api/orders
///
/// Stores the order. The submitted `subtotal` is discarded and replaced by
/// the rounded sum of `price * quantity` over the items.
#[utoipa::path(
    post,
    path = "/api/orders",
    request_body = Order,
    responses(
        (status = 201, description = "Order stored with recomputed subtotal", body = StoredOrder),
        (status = 400, description = "Order has no items"),
        (status = 422, description = "Invalid item price or quantity"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "orders"
)]
pub async fn create_order(
    state: web::Data<AppState>,
    body: web::Json<Order>,
) -> Result<HttpResponse, AppError> {
    let orders = state.orders.clone();
    let order = body.into_inner();

    let stored = web::block(move || orders.create_order(order))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Created().json(stored))
}
