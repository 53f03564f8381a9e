//! Storefront API Library
//!
//! Products and shopping carts behind a small REST surface. Handlers forward
//! to services, services forward to a [`repositories::CrudRepository`], which
//! is either SeaORM-backed or held in process memory.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![allow(elided_lifetimes_in_paths)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

pub mod config;
pub mod db;
pub mod entities;
pub mod errors;
pub mod handlers;
pub mod health;
pub mod middleware_helpers;
pub mod migrator;
pub mod models;
pub mod openapi;
pub mod repositories;
pub mod services;
pub mod telemetry;

use axum::Router;
use sea_orm::DatabaseConnection;
use std::sync::Arc;

// App state definition
#[derive(Clone)]
pub struct AppState {
    /// `None` when running on the in-memory backend
    pub db: Option<Arc<DatabaseConnection>>,
    pub config: config::AppConfig,
    pub services: handlers::AppServices,
}

impl AppState {
    pub fn in_memory(config: config::AppConfig) -> Self {
        Self {
            db: None,
            config,
            services: handlers::AppServices::in_memory(),
        }
    }

    pub fn with_database(config: config::AppConfig, db: Arc<DatabaseConnection>) -> Self {
        Self {
            services: handlers::AppServices::with_database(db.clone()),
            db: Some(db),
            config,
        }
    }
}

/// Resource routes, mounted under `/api`
pub fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .nest("/products", handlers::products::products_routes())
        .nest("/carts", handlers::carts::carts_routes())
}

/// Full application router with request-id and trace layers applied.
///
/// CORS and compression depend on deployment settings and are added by the
/// binary.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .nest("/api", api_routes())
        .merge(health::health_routes())
        .merge(openapi::openapi_routes())
        .layer(telemetry::configure_http_tracing())
        .layer(axum::middleware::from_fn(
            middleware_helpers::request_id_middleware,
        ))
        .with_state(state)
}
