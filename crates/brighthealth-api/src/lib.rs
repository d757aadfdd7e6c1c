//! # brighthealth-api
//!
//! HTTP API layer for Bright Health built on Axum.
//!
//! Provides the auth and user endpoints, bearer token extractors, DTOs,
//! CORS configuration, and the mapping from domain errors to responses.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use error::ApiError;
pub use state::AppState;
