use axum::{routing::get, Json, Router};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::{
    errors::ErrorResponse,
    handlers::{carts, products},
    models::{Cart, Category, Product},
    AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Storefront API",
        version = "0.1.0",
        description = "Products and shopping carts. Carts are looked up by customer name, ignoring case."
    ),
    paths(
        products::list_products,
        products::get_product,
        products::create_product,
        products::update_product,
        products::delete_product,
        carts::list_carts,
        carts::get_cart_by_customer,
        carts::create_cart,
    ),
    components(schemas(Product, Cart, Category, ErrorResponse)),
    tags(
        (name = "products", description = "Product catalog"),
        (name = "carts", description = "Shopping carts")
    )
)]
pub struct ApiDoc;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Serves the generated document at `/api-docs/openapi.json`
pub fn openapi_routes() -> Router<Arc<AppState>> {
    Router::new().route("/api-docs/openapi.json", get(openapi_json))
}
