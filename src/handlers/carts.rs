use crate::handlers::common::{found_or_404, map_service_error, success_response};
use crate::{errors::ApiError, models::Cart, AppState};
use axum::{
    extract::{Json, Path, State},
    response::IntoResponse,
    routing::get,
    Router,
};
use std::sync::Arc;

/// Creates the router for cart endpoints
pub fn carts_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_carts).post(create_cart))
        .route("/:customer_name", get(get_cart_by_customer))
}

/// List all carts, oldest first
#[utoipa::path(
    get,
    path = "/api/carts",
    tag = "carts",
    responses(
        (status = 200, description = "All stored carts", body = [Cart]),
    )
)]
pub async fn list_carts(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, ApiError> {
    let carts = state
        .services
        .carts
        .list_all()
        .await
        .map_err(map_service_error)?;

    Ok(success_response(carts))
}

/// Get the first cart registered under a customer name (case-insensitive)
#[utoipa::path(
    get,
    path = "/api/carts/{customer_name}",
    tag = "carts",
    params(("customer_name" = String, Path, description = "Customer name, matched ignoring case")),
    responses(
        (status = 200, description = "Cart found", body = Cart),
        (status = 404, description = "No cart for this customer", body = crate::errors::ErrorResponse),
    )
)]
pub async fn get_cart_by_customer(
    State(state): State<Arc<AppState>>,
    Path(customer_name): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let cart = state
        .services
        .carts
        .find_by_customer_name(&customer_name)
        .await
        .map_err(map_service_error)?;

    let cart = found_or_404(cart, || format!("No cart for customer {}", customer_name))?;
    Ok(success_response(cart))
}

/// Create a cart with its categories
#[utoipa::path(
    post,
    path = "/api/carts",
    tag = "carts",
    request_body = Cart,
    responses(
        (status = 200, description = "Cart created", body = Cart),
    )
)]
pub async fn create_cart(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<Cart>,
) -> Result<impl IntoResponse, ApiError> {
    let cart = state
        .services
        .carts
        .create(payload)
        .await
        .map_err(map_service_error)?;

    Ok(success_response(cart))
}
