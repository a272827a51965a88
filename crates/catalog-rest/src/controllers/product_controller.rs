//! Product controller.

use crate::{
    responses::{accepted, created, no_content, ok, ApiResult, AppError, MessageResponse},
    state::AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use catalog_core::{CatalogError, Product, ProductId};
use tracing::debug;

/// Creates the product router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route("/update", post(update_product))
        .route("/cached/:id", get(get_cached_product))
        .route("/cache/:id", delete(invalidate_cached_product))
        .route("/:id", get(get_product).delete(delete_product))
}

/// Creates the router for the conventional `/api/product/...` endpoint names.
pub fn legacy_router() -> Router<AppState> {
    Router::new()
        .route("/getproducts", get(list_products))
        .route("/getproductbyid/:id", get(get_product))
        .route("/addproduct", post(create_product))
        .route("/updateproduct", post(update_product))
        .route("/delete/:id", delete(delete_product))
}

/// List all products.
async fn list_products(State(state): State<AppState>) -> ApiResult<Vec<Product>> {
    debug!("List products request");

    let products = state.product_service.get_all_products().await?;
    ok(products)
}

/// Get a product from the document store.
async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Product> {
    debug!("Get product request: {}", id);

    let product_id = parse_product_id(&id)?;
    let product = state.product_service.get_product_by_id(product_id).await?;
    ok(product)
}

/// Get a product through the cache.
async fn get_cached_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Product> {
    debug!("Get cached product request: {}", id);

    let product_id = parse_product_id(&id)?;
    let product = state.product_service.get_cached_product(product_id).await?;
    ok(product)
}

/// Drop the cached copy of a product.
async fn invalidate_cached_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<MessageResponse> {
    debug!("Invalidate cache request: {}", id);

    let product_id = parse_product_id(&id)?;
    state
        .product_service
        .invalidate_cached_product(product_id)
        .await?;
    ok(MessageResponse::new(format!(
        "Cache entry for product {} invalidated",
        product_id
    )))
}

/// Create a product.
async fn create_product(
    State(state): State<AppState>,
    Json(product): Json<Product>,
) -> StatusCode {
    debug!("Create product request: {}", product.id);

    state.product_service.add_product(product).await;
    created()
}

/// Update a product. The store applies the change asynchronously.
async fn update_product(
    State(state): State<AppState>,
    Json(product): Json<Option<Product>>,
) -> StatusCode {
    debug!(
        "Update product request: {}",
        product.as_ref().map_or_else(|| "none".to_string(), |p| p.id.to_string())
    );

    state.product_service.update_product(product).await;
    accepted()
}

/// Delete a product.
async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    debug!("Delete product request: {}", id);

    let product_id = parse_product_id(&id)?;
    state.product_service.delete_product(product_id).await;
    Ok(no_content())
}

/// Helper to parse a product ID from a path parameter.
fn parse_product_id(id: &str) -> Result<ProductId, AppError> {
    ProductId::parse(id)
        .map_err(|_| AppError(CatalogError::validation(format!("Invalid product ID: {}", id))))
}
