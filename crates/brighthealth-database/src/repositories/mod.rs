//! Repository implementations backed by SQLite.

pub mod user;

pub use user::SqliteUserDirectory;
