//! PostgreSQL error mapping.
//!
//! Maps `sqlx::Error` to `RepositoryError` from `adminbot_core::storage`.

use adminbot_core::storage::RepositoryError;

/// SQLSTATE codes for lock contention that a retry may resolve.
const TRANSIENT_SQLSTATES: &[&str] = &[
    "40001", // serialization_failure
    "40P01", // deadlock_detected
    "55P03", // lock_not_available
];

/// Maps a sqlx error to a RepositoryError.
///
/// # Error Mapping
///
/// - Pool exhaustion, closed pool, I/O and TLS errors → `RepositoryError::ConnectionFailed`
/// - Invalid connection string → `RepositoryError::ConnectionFailed`
/// - Lock contention SQLSTATEs → `RepositoryError::Busy`
/// - Decode failures → `RepositoryError::InvalidData`
/// - All other errors → `RepositoryError::QueryFailed`
pub fn map_sqlx_error(err: sqlx::Error) -> RepositoryError {
    match &err {
        sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::Io(_)
        | sqlx::Error::Tls(_) => RepositoryError::ConnectionFailed(err.to_string()),

        sqlx::Error::Configuration(_) => {
            RepositoryError::ConnectionFailed(format!("Invalid connection string: {err}"))
        }

        sqlx::Error::Database(db_err)
            if db_err
                .code()
                .is_some_and(|code| TRANSIENT_SQLSTATES.contains(&&*code)) =>
        {
            RepositoryError::Busy(err.to_string())
        }

        sqlx::Error::ColumnDecode { .. } | sqlx::Error::Decode(_) => {
            RepositoryError::InvalidData(err.to_string())
        }

        _ => RepositoryError::QueryFailed(err.to_string()),
    }
}
