//! Service banner and health check handlers.

use axum::Json;

use crate::dto::response::{HealthResponse, RootResponse};

/// Service name reported by the banner.
pub const SERVICE_TITLE: &str = "Bright Health Auth MVP";

/// Identifier reported by the health probe.
pub const SERVICE_ID: &str = "auth-mvp";

/// GET /
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: SERVICE_TITLE.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        status: "running".to_string(),
    })
}

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: SERVICE_ID.to_string(),
    })
}
