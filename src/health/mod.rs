/*!
 * # Health Check Module
 *
 * `/health` reports whether the service can reach its datastore. With the
 * in-memory backend there is nothing to ping and the service is always up.
 */

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, error};

use crate::AppState;

/// Basic health status
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Up,
    Down,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct HealthInfo {
    pub status: HealthStatus,
    pub version: String,
    pub storage: String,
    pub environment: String,
    pub timestamp: DateTime<Utc>,
}

/// Basic health check endpoint
pub async fn health_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    debug!("Health check endpoint called");

    let (status, storage) = match &state.db {
        Some(db) => match crate::db::check_connection(db).await {
            Ok(()) => (HealthStatus::Up, "database"),
            Err(e) => {
                error!("Database health check failed: {}", e);
                (HealthStatus::Down, "database")
            }
        },
        None => (HealthStatus::Up, "in-memory"),
    };

    let status_code = match status {
        HealthStatus::Up => StatusCode::OK,
        HealthStatus::Down => StatusCode::SERVICE_UNAVAILABLE,
    };

    (
        status_code,
        Json(HealthInfo {
            status,
            version: env!("CARGO_PKG_VERSION").to_string(),
            storage: storage.to_string(),
            environment: state.config.environment.clone(),
            timestamp: Utc::now(),
        }),
    )
}

/// Creates router with health check endpoints
pub fn health_routes() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(health_check))
}
