#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::{self, Body},
    http::{Method, Request},
    response::Response,
    Router,
};
use serde_json::Value;
use storefront_api::{config::AppConfig, db, AppState};
use tempfile::TempDir;
use tower::ServiceExt;

/// Helper harness wrapping the application router.
///
/// `new` runs on the in-memory backend; `with_sqlite` uses a fresh SQLite
/// file in a temporary directory with the migrations applied.
pub struct TestApp {
    router: Router,
    pub state: Arc<AppState>,
    _db_dir: Option<TempDir>,
}

fn test_config(database_url: String) -> AppConfig {
    let mut cfg = AppConfig::new(
        database_url,
        "127.0.0.1".to_string(),
        18_080,
        "test".to_string(),
    );
    cfg.cors_allow_any_origin = true;
    cfg.db_max_connections = 1;
    cfg.db_min_connections = 1;
    cfg
}

impl TestApp {
    pub fn new() -> Self {
        let state = Arc::new(AppState::in_memory(test_config(
            "sqlite::memory:".to_string(),
        )));

        Self {
            router: storefront_api::build_router(state.clone()),
            state,
            _db_dir: None,
        }
    }

    pub async fn with_sqlite() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("storefront_test.db");
        let cfg = test_config(format!("sqlite://{}?mode=rwc", path.display()));

        let pool = db::establish_connection_from_app_config(&cfg)
            .await
            .expect("failed to create test database");
        db::run_migrations(&pool)
            .await
            .expect("failed to run migrations in tests");

        let state = Arc::new(AppState::with_database(cfg, Arc::new(pool)));
        Self {
            router: storefront_api::build_router(state.clone()),
            state,
            _db_dir: Some(dir),
        }
    }

    /// Send a request against the router with an optional JSON body.
    pub async fn request(&self, method: Method, uri: &str, body: Option<Value>) -> Response {
        let mut builder = Request::builder().method(method).uri(uri);

        let body = if let Some(json) = body {
            builder = builder.header("content-type", "application/json");
            Body::from(serde_json::to_vec(&json).expect("failed to serialize json request body"))
        } else {
            Body::empty()
        };

        let request = builder.body(body).expect("failed to build request");
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("router error during test request")
    }
}

pub async fn response_json(response: Response) -> Value {
    let bytes = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("response body bytes");
    serde_json::from_slice(&bytes).expect("json response")
}
