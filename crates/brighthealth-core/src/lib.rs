//! # brighthealth-core
//!
//! Core crate for the Bright Health auth service. Contains configuration
//! schemas, the pagination request type, and the unified error system.
//!
//! This crate has **no** internal dependencies on other workspace crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::{AppError, ErrorKind};
pub use result::AppResult;
