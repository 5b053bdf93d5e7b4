use thiserror::Error;

/// Errors that can occur during repository operations.
///
/// Constraint violations never appear here: inserting a duplicate admin or
/// deleting a missing one succeeds.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    /// The storage engine is locked by another writer. Safe to retry.
    #[error("Storage busy: {0}")]
    Busy(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl RepositoryError {
    /// Whether retrying the same operation later may succeed.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::ConnectionFailed(_) | Self::Busy(_))
    }
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_error_connection_failed_display() {
        let error = RepositoryError::ConnectionFailed("timeout after 5s".to_string());
        assert_eq!(error.to_string(), "Connection failed: timeout after 5s");
    }

    #[test]
    fn test_repository_error_busy_display() {
        let error = RepositoryError::Busy("database is locked".to_string());
        assert_eq!(error.to_string(), "Storage busy: database is locked");
    }

    #[test]
    fn test_repository_error_query_failed_display() {
        let error = RepositoryError::QueryFailed("no such table: admins".to_string());
        assert_eq!(error.to_string(), "Query failed: no such table: admins");
    }

    #[test]
    fn test_repository_error_invalid_data_display() {
        let error = RepositoryError::InvalidData("user_id is NULL".to_string());
        assert_eq!(error.to_string(), "Invalid data: user_id is NULL");
    }

    #[test]
    fn test_transient_errors() {
        assert!(RepositoryError::Busy(String::new()).is_transient());
        assert!(RepositoryError::ConnectionFailed(String::new()).is_transient());
        assert!(!RepositoryError::QueryFailed(String::new()).is_transient());
        assert!(!RepositoryError::InvalidData(String::new()).is_transient());
    }
}
