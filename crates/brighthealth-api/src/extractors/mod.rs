//! Custom Axum extractors.

pub mod auth;
pub mod rejection;

pub use auth::{ActiveUser, CurrentUser};
pub use rejection::{ApiForm, ApiJson, ApiPath, ApiQuery};
