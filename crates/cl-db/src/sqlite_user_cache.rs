use crate::{DbError, Result as DbErrorResult, UserCache};

use cl_core::CanonicalUser;

use std::panic::Location;
use std::path::Path;

use async_trait::async_trait;
use chrono::Utc;
use error_location::ErrorLocation;
use log::{debug, warn};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

const MAX_CONNECTIONS: u32 = 5;

/// [`UserCache`] persisted in a SQLite database.
#[derive(Clone, Debug)]
pub struct SqliteUserCache {
    pool: SqlitePool,
}

impl SqliteUserCache {
    /// Wrap an existing pool. The schema must already be migrated.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open (creating if missing) the database at `path` and run migrations.
    pub async fn open(path: impl AsRef<Path>) -> DbErrorResult<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| DbError::Initialization {
                    message: format!(
                        "Failed to create cache directory {}: {}",
                        parent.display(),
                        e
                    ),
                    location: ErrorLocation::from(Location::caller()),
                })?;
        }

        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect_with(options)
            .await?;

        Self::migrate(&pool).await?;

        debug!("Opened user cache at {}", path.display());

        Ok(Self { pool })
    }

    pub async fn migrate(pool: &SqlitePool) -> DbErrorResult<()> {
        sqlx::migrate!("./migrations")
            .run(pool)
            .await
            .map_err(|e| DbError::Migration {
                message: format!("Migration failed: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(())
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub async fn find_by_key(&self, key: &str) -> DbErrorResult<Option<CanonicalUser>> {
        let row = sqlx::query_as::<_, (String, String, String, String)>(
            r#"
                SELECT user_key, login, name, email
                FROM cl_users
                WHERE user_key = ?
                "#,
        )
        .bind(key)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|(key, login, name, email)| CanonicalUser {
            key,
            login,
            name,
            email,
        }))
    }

    pub async fn upsert(&self, user: &CanonicalUser) -> DbErrorResult<()> {
        if user.key.is_empty() {
            return Err(DbError::invalid_record("user key is empty"));
        }

        let now = Utc::now().timestamp();

        // Empty incoming fields never overwrite what is already stored
        sqlx::query(
            r#"
              INSERT INTO cl_users (user_key, login, name, email, created_at, updated_at)
              VALUES (?, ?, ?, ?, ?, ?)
              ON CONFLICT(user_key) DO UPDATE SET
                  login = CASE WHEN excluded.login <> '' THEN excluded.login ELSE cl_users.login END,
                  name = CASE WHEN excluded.name <> '' THEN excluded.name ELSE cl_users.name END,
                  email = CASE WHEN excluded.email <> '' THEN excluded.email ELSE cl_users.email END,
                  updated_at = excluded.updated_at
              "#,
        )
        .bind(&user.key)
        .bind(&user.login)
        .bind(&user.name)
        .bind(&user.email)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn count(&self) -> DbErrorResult<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM cl_users")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

#[async_trait]
impl UserCache for SqliteUserCache {
    async fn get_user(&self, key: &str) -> Option<CanonicalUser> {
        match self.find_by_key(key).await {
            Ok(user) => user,
            Err(e) => {
                warn!("Failed to read cached user {}: {}", key, e);
                None
            }
        }
    }

    async fn create_or_update_user(&self, user: &CanonicalUser) -> DbErrorResult<()> {
        self.upsert(user).await
    }
}
