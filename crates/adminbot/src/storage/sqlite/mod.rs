//! SQLite storage backend implementation.
//!
//! This module provides a SQLite-based implementation of `AdminRepository`
//! using `rusqlite` for synchronous operations and `tokio-rusqlite` for async wrapping.

mod error;
mod repository;
mod schema;

pub use repository::{SqliteRepository, DEFAULT_BUSY_TIMEOUT};
