//! Storage backend implementations.
//!
//! This module provides the concrete implementations of `AdminRepository`
//! defined in `adminbot_core::storage`, and `StorageBackend`, the connection
//! provider that opens whichever one the resolved configuration selects.
//!
//! # Feature Flags
//!
//! - `sqlite` (default): SQLite storage backend using `rusqlite` and `tokio-rusqlite`
//! - `postgres` (default): PostgreSQL storage backend using `sqlx`
//!
//! Both may be compiled in; the backend is chosen at startup from `DB_TYPE`.
//! Selecting a backend whose feature is disabled fails startup.

#[cfg(not(any(feature = "sqlite", feature = "postgres")))]
compile_error!(
    "No storage backend selected. Enable 'sqlite' or 'postgres' feature. \
    Example: cargo build -p adminbot --features sqlite"
);

#[cfg(feature = "postgres")]
pub mod postgres;

#[cfg(feature = "sqlite")]
pub mod sqlite;

use async_trait::async_trait;

use adminbot_core::admin::UserId;
use adminbot_core::backend::{BackendConfig, BackendKind};
use adminbot_core::storage::{AdminRepository, Result};

use crate::config::ConfigError;
use crate::error::StartupError;

#[cfg(feature = "postgres")]
pub use postgres::PostgresRepository;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteRepository;

/// The active storage backend, selected once at startup.
#[derive(Clone)]
pub enum StorageBackend {
    #[cfg(feature = "postgres")]
    Postgres(PostgresRepository),
    #[cfg(feature = "sqlite")]
    Sqlite(SqliteRepository),
}

/// Forwards a call to whichever repository is active.
macro_rules! delegate {
    ($backend:expr, $repo:ident => $call:expr) => {
        match $backend {
            #[cfg(feature = "postgres")]
            StorageBackend::Postgres($repo) => $call,
            #[cfg(feature = "sqlite")]
            StorageBackend::Sqlite($repo) => $call,
        }
    };
}

impl StorageBackend {
    /// Opens the backend described by `config`.
    ///
    /// PostgreSQL gets a pool of `pool_size` connections. An unknown or
    /// disabled backend, or PostgreSQL without a connection string, is a
    /// configuration error.
    #[cfg_attr(not(feature = "postgres"), allow(unused_variables))]
    pub async fn open(
        config: &BackendConfig,
        pool_size: u32,
    ) -> std::result::Result<Self, StartupError> {
        match &config.kind {
            #[cfg(feature = "postgres")]
            BackendKind::Postgres => {
                let url = config
                    .target
                    .as_deref()
                    .ok_or(ConfigError::MissingTarget {
                        kind: "postgres",
                        variable: "DATABASE_URL",
                    })?;
                let repo = PostgresRepository::connect(url, pool_size).await?;
                Ok(Self::Postgres(repo))
            }
            #[cfg(feature = "sqlite")]
            BackendKind::Sqlite => {
                let path = config
                    .target
                    .as_deref()
                    .unwrap_or(adminbot_core::backend::DEFAULT_SQLITE_PATH);
                let repo = SqliteRepository::open(path).await?;
                Ok(Self::Sqlite(repo))
            }
            other => Err(ConfigError::UnsupportedBackend(other.to_string()).into()),
        }
    }

    pub fn kind(&self) -> BackendKind {
        match self {
            #[cfg(feature = "postgres")]
            Self::Postgres(_) => BackendKind::Postgres,
            #[cfg(feature = "sqlite")]
            Self::Sqlite(_) => BackendKind::Sqlite,
        }
    }

    /// Releases the pool or connection. Errors are logged, not returned.
    pub async fn close(&self) {
        match self {
            #[cfg(feature = "postgres")]
            Self::Postgres(repo) => repo.close().await,
            #[cfg(feature = "sqlite")]
            Self::Sqlite(repo) => {
                if let Err(e) = repo.close().await {
                    tracing::warn!(error = %e, "Failed to close SQLite connection");
                }
            }
        }
    }
}

#[async_trait]
impl AdminRepository for StorageBackend {
    async fn ensure_schema(&self) -> Result<()> {
        delegate!(self, repo => repo.ensure_schema().await)
    }

    async fn add_admin(&self, user_id: UserId) -> Result<()> {
        delegate!(self, repo => repo.add_admin(user_id).await)
    }

    async fn remove_admin(&self, user_id: UserId) -> Result<()> {
        delegate!(self, repo => repo.remove_admin(user_id).await)
    }

    async fn list_admins(&self) -> Result<Vec<UserId>> {
        delegate!(self, repo => repo.list_admins().await)
    }

    async fn is_admin(&self, user_id: UserId) -> Result<bool> {
        delegate!(self, repo => repo.is_admin(user_id).await)
    }
}
