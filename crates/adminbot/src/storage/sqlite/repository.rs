//! SQLite repository implementation.
//!
//! Implements `AdminRepository` from `adminbot_core::storage` using SQLite.

use std::time::Duration;

use async_trait::async_trait;
use tokio_rusqlite::Connection;

use adminbot_core::admin::UserId;
use adminbot_core::storage::{AdminRepository, RepositoryError, Result};

use super::error::map_tokio_rusqlite_error;
use super::schema;

/// How long a statement waits on a lock held by another process before
/// failing with `RepositoryError::Busy`.
pub const DEFAULT_BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-based repository implementation.
///
/// Holds one long-lived connection. `tokio_rusqlite` runs every statement on
/// the connection's background thread, so writers from this process are
/// serialized there instead of contending for the file lock.
#[derive(Clone)]
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Opens a file-based database, creating the file if it doesn't exist.
    ///
    /// The schema is not created here; call `ensure_schema`.
    pub async fn open(path: &str) -> Result<Self> {
        Self::open_with_busy_timeout(path, DEFAULT_BUSY_TIMEOUT).await
    }

    pub async fn open_with_busy_timeout(path: &str, busy_timeout: Duration) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::configure(&conn, busy_timeout).await?;

        tracing::debug!(path = %path, "Opened SQLite database");
        Ok(Self { conn })
    }

    /// Creates a repository with an in-memory database.
    ///
    /// Useful for testing - data is lost when the connection is dropped.
    pub async fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::configure(&conn, DEFAULT_BUSY_TIMEOUT).await?;

        Ok(Self { conn })
    }

    async fn configure(conn: &Connection, busy_timeout: Duration) -> Result<()> {
        conn.call(move |conn| {
            conn.busy_timeout(busy_timeout).map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(map_tokio_rusqlite_error)
    }

    /// Closes the underlying connection. Later calls on any clone fail with
    /// `RepositoryError::ConnectionFailed`.
    pub async fn close(&self) -> Result<()> {
        self.conn
            .clone()
            .close()
            .await
            .map_err(map_tokio_rusqlite_error)
    }
}

#[async_trait]
impl AdminRepository for SqliteRepository {
    async fn ensure_schema(&self) -> Result<()> {
        self.conn
            .call(|conn| {
                conn.execute_batch(schema::CREATE_ADMINS_TABLE)
                    .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn add_admin(&self, user_id: UserId) -> Result<()> {
        let id = user_id.get();

        self.conn
            .call(move |conn| {
                conn.execute(schema::INSERT_ADMIN, [id]).map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn remove_admin(&self, user_id: UserId) -> Result<()> {
        let id = user_id.get();

        self.conn
            .call(move |conn| {
                conn.execute(schema::DELETE_ADMIN, [id]).map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn list_admins(&self) -> Result<Vec<UserId>> {
        self.conn
            .call(|conn| {
                let mut stmt = conn.prepare(schema::SELECT_ADMINS).map_err(wrap_err)?;
                let rows = stmt
                    .query_map([], |row| row.get::<_, i64>(0))
                    .map_err(wrap_err)?;

                let mut admins = Vec::new();
                for row_result in rows {
                    admins.push(UserId::new(row_result.map_err(wrap_err)?));
                }
                Ok(admins)
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn is_admin(&self, user_id: UserId) -> Result<bool> {
        let id = user_id.get();

        self.conn
            .call(move |conn| {
                conn.query_row(schema::SELECT_ADMIN_EXISTS, [id], |row| row.get::<_, bool>(0))
                    .map_err(wrap_err)
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }
}
