//! SQLite user repository.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use brighthealth_core::error::{AppError, ErrorKind};
use brighthealth_core::result::AppResult;
use brighthealth_core::types::PageRequest;
use brighthealth_entity::user::{NewUser, User, UserChanges};

use crate::directory::UserDirectory;

/// User directory backed by the `users` table.
///
/// Uniqueness is enforced by the table's `UNIQUE` constraints, so a lost
/// check-then-create race surfaces here as a conflict.
#[derive(Debug, Clone)]
pub struct SqliteUserDirectory {
    pool: SqlitePool,
}

impl SqliteUserDirectory {
    /// Create a new user repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserDirectory for SqliteUserDirectory {
    async fn get_by_id(&self, id: i64) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ?1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find user by id", e))
    }

    async fn get_by_username(&self, username: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE username = ?1")
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find user by username", e)
            })
    }

    async fn get_by_email(&self, email: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = ?1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find user by email", e)
            })
    }

    async fn list(&self, page: &PageRequest) -> AppResult<Vec<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users ORDER BY id ASC LIMIT ?1 OFFSET ?2")
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list users", e))
    }

    async fn create(&self, new_user: NewUser) -> AppResult<User> {
        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (email, username, full_name, role, is_active, hashed_password, created_at) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7) \
             RETURNING *",
        )
        .bind(&new_user.email)
        .bind(&new_user.username)
        .bind(&new_user.full_name)
        .bind(new_user.role)
        .bind(new_user.is_active)
        .bind(&new_user.hashed_password)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_error(e, "Failed to create user"))?;

        debug!(user_id = user.id, username = %user.username, "Inserted user row");
        Ok(user)
    }

    async fn update(&self, id: i64, changes: UserChanges) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>(
            "UPDATE users SET email = COALESCE(?2, email), \
                              full_name = COALESCE(?3, full_name), \
                              hashed_password = COALESCE(?4, hashed_password), \
                              is_active = COALESCE(?5, is_active), \
                              updated_at = ?6 \
             WHERE id = ?1 RETURNING *",
        )
        .bind(id)
        .bind(&changes.email)
        .bind(&changes.full_name)
        .bind(&changes.hashed_password)
        .bind(changes.is_active)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_write_error(e, "Failed to update user"))
    }
}

/// Maps a write failure to a conflict when it hit a uniqueness constraint.
fn map_write_error(err: sqlx::Error, context: &str) -> AppError {
    match err {
        sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
            let message = if db_err.message().contains("users.email") {
                "Email already registered"
            } else if db_err.message().contains("users.username") {
                "Username already registered"
            } else {
                "User already exists"
            };
            AppError::with_source(ErrorKind::Conflict, message, err)
        }
        _ => AppError::with_source(ErrorKind::Database, context.to_string(), err),
    }
}

#[cfg(test)]
mod tests {
    use brighthealth_core::config::DatabaseConfig;
    use brighthealth_entity::user::UserRole;

    use super::*;
    use crate::connection::DatabasePool;
    use crate::migration::run_migrations;

    async fn directory() -> SqliteUserDirectory {
        let config = DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            ..Default::default()
        };
        let pool = DatabasePool::connect(&config).await.unwrap();
        run_migrations(pool.pool()).await.unwrap();
        SqliteUserDirectory::new(pool.into_pool())
    }

    fn new_user(username: &str, email: &str) -> NewUser {
        NewUser {
            email: email.to_string(),
            username: username.to_string(),
            full_name: format!("{username} tester"),
            role: UserRole::Patient,
            is_active: true,
            hashed_password: "$argon2id$stub".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_and_lookup() {
        let dir = directory().await;
        let created = dir.create(new_user("alice", "a@x.com")).await.unwrap();
        assert!(created.id > 0);
        assert!(created.is_active);
        assert_eq!(created.role, UserRole::Patient);
        assert!(created.updated_at.is_none());

        let by_name = dir.get_by_username("alice").await.unwrap().unwrap();
        let by_email = dir.get_by_email("a@x.com").await.unwrap().unwrap();
        let by_id = dir.get_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(by_name.id, created.id);
        assert_eq!(by_email.id, created.id);
        assert_eq!(by_id.username, "alice");
        assert!(dir.get_by_username("bob").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_email_and_username_conflict() {
        let dir = directory().await;
        dir.create(new_user("alice", "a@x.com")).await.unwrap();

        let err = dir.create(new_user("alice2", "a@x.com")).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Conflict);
        assert_eq!(err.message, "Email already registered");

        let err = dir.create(new_user("alice", "b@x.com")).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Conflict);
        assert_eq!(err.message, "Username already registered");

        assert_eq!(dir.list(&PageRequest::default()).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_partial_update() {
        let dir = directory().await;
        let created = dir.create(new_user("alice", "a@x.com")).await.unwrap();

        let updated = dir
            .update(
                created.id,
                UserChanges {
                    full_name: Some("Alice L".to_string()),
                    is_active: Some(false),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.full_name, "Alice L");
        assert!(!updated.is_active);
        assert_eq!(updated.email, "a@x.com");
        assert_eq!(updated.hashed_password, "$argon2id$stub");
        assert!(updated.updated_at.is_some());

        let missing = dir.update(9999, UserChanges::default()).await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_update_missing_id_is_none_even_with_taken_email() {
        let dir = directory().await;
        dir.create(new_user("alice", "a@x.com")).await.unwrap();

        let changes = UserChanges {
            email: Some("a@x.com".to_string()),
            ..Default::default()
        };
        assert!(dir.update(9999, changes).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_pages_by_id() {
        let dir = directory().await;
        for i in 0..5 {
            dir.create(new_user(&format!("user{i}"), &format!("u{i}@x.com")))
                .await
                .unwrap();
        }

        let page = dir.list(&PageRequest::new(1, 2)).await.unwrap();
        let names: Vec<_> = page.iter().map(|u| u.username.as_str()).collect();
        assert_eq!(names, vec!["user1", "user2"]);
    }
}
