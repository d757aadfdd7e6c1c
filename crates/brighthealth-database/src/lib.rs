//! # brighthealth-database
//!
//! The user directory contract consumed by the auth core, plus two
//! implementations: a SQLite-backed repository and an in-memory store.

pub mod connection;
pub mod directory;
pub mod memory;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
pub use directory::UserDirectory;
pub use memory::MemoryUserDirectory;
pub use repositories::SqliteUserDirectory;
