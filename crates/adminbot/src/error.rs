use thiserror::Error;

use adminbot_core::storage::RepositoryError;

use crate::config::ConfigError;

/// Errors that abort startup.
///
/// Once the process is serving commands, storage errors are answered by the
/// handlers instead and never reach this type.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("storage unavailable: {0}")]
    Storage(#[from] RepositoryError),
}
