//! PostgreSQL repository implementation.
//!
//! Implements `AdminRepository` from `adminbot_core::storage` on a shared pool.

use std::time::Duration;

use async_trait::async_trait;
use sqlx::pool::PoolConnection;
use sqlx::postgres::{PgPool, PgPoolOptions};
use sqlx::Postgres;

use adminbot_core::admin::UserId;
use adminbot_core::storage::{AdminRepository, Result};

use super::error::map_sqlx_error;
use super::schema;

/// How long an operation waits for a free pooled connection.
pub const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// PostgreSQL-based repository implementation.
///
/// Every operation checks a connection out of the pool for the duration of
/// a single statement. The `PoolConnection` guard hands it back when dropped,
/// including on error paths.
#[derive(Clone)]
pub struct PostgresRepository {
    pool: PgPool,
}

impl PostgresRepository {
    /// Connects a new pool with at most `max_connections` connections.
    pub async fn connect(url: &str, max_connections: u32) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(ACQUIRE_TIMEOUT)
            .connect(url)
            .await
            .map_err(map_sqlx_error)?;

        tracing::debug!(max_connections, "Opened PostgreSQL pool");
        Ok(Self { pool })
    }

    /// Wraps an existing pool.
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Closes the pool, waiting for checked-out connections to come back.
    pub async fn close(&self) {
        self.pool.close().await;
    }

    async fn acquire(&self) -> Result<PoolConnection<Postgres>> {
        self.pool.acquire().await.map_err(map_sqlx_error)
    }
}

#[async_trait]
impl AdminRepository for PostgresRepository {
    async fn ensure_schema(&self) -> Result<()> {
        let mut conn = self.acquire().await?;

        sqlx::query(schema::CREATE_ADMINS_TABLE)
            .execute(&mut *conn)
            .await
            .map_err(map_sqlx_error)?;

        Ok(())
    }

    async fn add_admin(&self, user_id: UserId) -> Result<()> {
        let mut conn = self.acquire().await?;

        sqlx::query(schema::INSERT_ADMIN)
            .bind(user_id.get())
            .execute(&mut *conn)
            .await
            .map_err(map_sqlx_error)?;

        Ok(())
    }

    async fn remove_admin(&self, user_id: UserId) -> Result<()> {
        let mut conn = self.acquire().await?;

        sqlx::query(schema::DELETE_ADMIN)
            .bind(user_id.get())
            .execute(&mut *conn)
            .await
            .map_err(map_sqlx_error)?;

        Ok(())
    }

    async fn list_admins(&self) -> Result<Vec<UserId>> {
        let mut conn = self.acquire().await?;

        let ids = sqlx::query_scalar::<_, i64>(schema::SELECT_ADMINS)
            .fetch_all(&mut *conn)
            .await
            .map_err(map_sqlx_error)?;

        Ok(ids.into_iter().map(UserId::new).collect())
    }

    async fn is_admin(&self, user_id: UserId) -> Result<bool> {
        let mut conn = self.acquire().await?;

        sqlx::query_scalar::<_, bool>(schema::SELECT_ADMIN_EXISTS)
            .bind(user_id.get())
            .fetch_one(&mut *conn)
            .await
            .map_err(map_sqlx_error)
    }
}
