use actix_web::{web, HttpResponse};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::application::catalog_service::SeedOutcome;
use crate::domain::document::StoredProduct;
use crate::domain::product::Product;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListProductsParams {
    /// Exact category to filter on
    pub category: Option<String>,
}

/// GET /api/products
///
/// Returns up to 100 products, optionally only those of one category.
#[utoipa::path(
    get,
    path = "/api/products",
    params(ListProductsParams),
    responses(
        (status = 200, description = "Matching products", body = Vec<StoredProduct>),
        (status = 500, description = "Internal server error"),
    ),
    tag = "products"
)]
pub async fn list_products(
    state: web::Data<AppState>,
    query: web::Query<ListProductsParams>,
) -> Result<HttpResponse, AppError> {
    let catalog = state.catalog.clone();
    let category = query.into_inner().category;

    let products = web::block(move || catalog.list_products(category.as_deref()))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(products))
}

/// POST /api/products
#[utoipa::path(
    post,
    path = "/api/products",
    request_body = Product,
    responses(
        (status = 201, description = "Product stored", body = StoredProduct),
        (status = 422, description = "Invalid product"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "products"
)]
pub async fn create_product(
    state: web::Data<AppState>,
    body: web::Json<Product>,
) -> Result<HttpResponse, AppError> {
    let catalog = state.catalog.clone();
    let product = body.into_inner();

    let stored = web::block(move || catalog.create_product(product))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Created().json(stored))
}

/// GET /api/seed
///
/// Inserts the demo catalogue if, and only if, no product exists yet.
#[utoipa::path(
    get,
    path = "/api/seed",
    responses(
        (status = 200, description = "Number of products inserted", body = SeedOutcome),
        (status = 500, description = "Internal server error"),
    ),
    tag = "products"
)]
pub async fn seed_products(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let catalog = state.catalog.clone();

    let outcome = web::block(move || catalog.seed_products())
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(outcome))
}
