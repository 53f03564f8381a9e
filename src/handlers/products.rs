use crate::handlers::common::{
    found_or_404, map_service_error, no_content_response, success_response,
};
use crate::{errors::ApiError, models::Product, AppState};
use axum::{
    extract::{Json, Path, State},
    response::IntoResponse,
    routing::get,
    Router,
};
use std::sync::Arc;

/// Creates the router for product endpoints
pub fn products_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/:id",
            get(get_product).put(update_product).delete(delete_product),
        )
}

/// List all products
#[utoipa::path(
    get,
    path = "/api/products",
    tag = "products",
    responses(
        (status = 200, description = "All stored products", body = [Product]),
        (status = 500, description = "Storage failure", body = crate::errors::ErrorResponse),
    )
)]
pub async fn list_products(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let products = state
        .services
        .products
        .list_all()
        .await
        .map_err(map_service_error)?;

    Ok(success_response(products))
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/api/products/{id}",
    tag = "products",
    params(("id" = i64, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 404, description = "No product with this id", body = crate::errors::ErrorResponse),
    )
)]
pub async fn get_product(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let product = state
        .services
        .products
        .get_by_id(id)
        .await
        .map_err(map_service_error)?;

    let product = found_or_404(product, || format!("Product with ID {} not found", id))?;
    Ok(success_response(product))
}

/// Create a product
#[utoipa::path(
    post,
    path = "/api/products",
    tag = "products",
    request_body = Product,
    responses(
        (status = 200, description = "Product created", body = Product),
        (status = 500, description = "Storage failure", body = crate::errors::ErrorResponse),
    )
)]
pub async fn create_product(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<Product>,
) -> Result<impl IntoResponse, ApiError> {
    let product = state
        .services
        .products
        .create(payload)
        .await
        .map_err(map_service_error)?;

    Ok(success_response(product))
}

/// Replace name, price, categories and attributes of a product
#[utoipa::path(
    put,
    path = "/api/products/{id}",
    tag = "products",
    params(("id" = i64, Path, description = "Product id")),
    request_body = Product,
    responses(
        (status = 200, description = "Product updated", body = Product),
        (status = 404, description = "No product with this id", body = crate::errors::ErrorResponse),
    )
)]
pub async fn update_product(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(payload): Json<Product>,
) -> Result<impl IntoResponse, ApiError> {
    let product = state
        .services
        .products
        .update(id, payload)
        .await
        .map_err(map_service_error)?;

    Ok(success_response(product))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    tag = "products",
    params(("id" = i64, Path, description = "Product id")),
    responses(
        (status = 204, description = "Product deleted or never existed"),
    )
)]
pub async fn delete_product(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .services
        .products
        .delete(id)
        .await
        .map_err(map_service_error)?;

    Ok(no_content_response())
}
