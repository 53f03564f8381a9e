//! HTTP tests for the product endpoints.

mod common;

use axum::http::{Method, StatusCode};
use common::{response_json, TestApp};
use serde_json::json;

async fn create_kettle(app: &TestApp) -> i64 {
    let response = app
        .request(
            Method::POST,
            "/api/products",
            Some(json!({
                "name": "Kettle",
                "price": 35.0,
                "categories": ["kitchen", "electric"],
                "attributes": {"color": "steel"}
            })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    body["id"].as_i64().expect("created product has an id")
}

#[tokio::test]
async fn test_create_then_get_product() {
    let app = TestApp::new();
    let id = create_kettle(&app).await;

    let response = app
        .request(Method::GET, &format!("/api/products/{id}"), None)
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["id"], id);
    assert_eq!(body["name"], "Kettle");
    assert_eq!(body["price"], 35.0);
    assert_eq!(body["categories"], json!(["kitchen", "electric"]));
    assert_eq!(body["attributes"], json!({"color": "steel"}));
}

#[tokio::test]
async fn test_create_ignores_client_id() {
    let app = TestApp::new();

    let response = app
        .request(
            Method::POST,
            "/api/products",
            Some(json!({"id": 999, "name": "Mug", "price": 8.0})),
        )
        .await;
    let body = response_json(response).await;

    assert_ne!(body["id"], 999);
    assert_eq!(body["categories"], json!([]));
    assert_eq!(body["attributes"], json!({}));
}

#[tokio::test]
async fn test_get_missing_product_returns_404() {
    let app = TestApp::new();

    let response = app.request(Method::GET, "/api/products/4040", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = response_json(response).await;
    assert_eq!(body["error"], "Not Found");
    assert!(body["request_id"].as_str().is_some());
}

#[tokio::test]
async fn test_update_product_replaces_fields() {
    let app = TestApp::new();
    let id = create_kettle(&app).await;

    let response = app
        .request(
            Method::PUT,
            &format!("/api/products/{id}"),
            Some(json!({
                "name": "Electric kettle",
                "price": 42.5,
                "categories": ["appliances"],
                "attributes": {"voltage": "230"}
            })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["id"], id);
    assert_eq!(body["name"], "Electric kettle");
    assert_eq!(body["categories"], json!(["appliances"]));
    assert_eq!(body["attributes"], json!({"voltage": "230"}));
}

#[tokio::test]
async fn test_update_missing_product_returns_404() {
    let app = TestApp::new();

    let response = app
        .request(
            Method::PUT,
            "/api/products/77",
            Some(json!({"name": "Ghost", "price": 1.0})),
        )
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let list = response_json(app.request(Method::GET, "/api/products", None).await).await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn test_delete_product_and_missing_id() {
    let app = TestApp::new();
    let id = create_kettle(&app).await;

    let response = app
        .request(Method::DELETE, &format!("/api/products/{id}"), None)
        .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .request(Method::DELETE, &format!("/api/products/{id}"), None)
        .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .request(Method::GET, &format!("/api/products/{id}"), None)
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_products_in_creation_order() {
    let app = TestApp::new();
    for name in ["Lamp", "Desk", "Chair"] {
        app.request(
            Method::POST,
            "/api/products",
            Some(json!({"name": name, "price": 10.0})),
        )
        .await;
    }

    let body = response_json(app.request(Method::GET, "/api/products", None).await).await;
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Lamp", "Desk", "Chair"]);
}

#[tokio::test]
async fn test_request_id_is_echoed() {
    let app = TestApp::new();
    let response = app.request(Method::GET, "/api/products", None).await;

    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn test_health_and_openapi() {
    let app = TestApp::new();

    let response = app.request(Method::GET, "/health", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["status"], "up");
    assert_eq!(body["storage"], "in-memory");
    assert_eq!(body["environment"], "test");

    let response = app.request(Method::GET, "/api-docs/openapi.json", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert!(body["paths"]["/api/carts/{customer_name}"].is_object());
}
