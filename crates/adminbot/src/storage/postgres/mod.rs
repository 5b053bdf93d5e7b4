//! PostgreSQL storage backend implementation.
//!
//! Uses a shared `sqlx` connection pool that is opened once at startup and
//! closed at shutdown.

mod error;
mod repository;
mod schema;

pub use repository::{PostgresRepository, ACQUIRE_TIMEOUT};
