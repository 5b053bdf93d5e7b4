use std::{
    env, fs, io,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use thiserror::Error;

use adminbot_core::admin::UserId;
use adminbot_core::backend::BackendSources;

/// Config file consulted for `DB_TYPE` when the environment has no value.
pub const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Maximum PostgreSQL pool connections (default: 5).
pub const DEFAULT_POOL_SIZE: u32 = 5;

/// Configuration errors. All of them stop startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {name}: {value:?}")]
    InvalidValue { name: &'static str, value: String },

    #[error("unsupported database backend: {0:?}")]
    UnsupportedBackend(String),

    #[error("{kind} backend requires {variable} to be set")]
    MissingTarget {
        kind: &'static str,
        variable: &'static str,
    },

    #[error("failed to read config file {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config file {}: {source}", .path.display())]
    FileParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// The only identity allowed to manage admins (`OWNER_ID`, default: 0).
    pub owner_id: UserId,
    /// PostgreSQL pool size (`DATABASE_POOL_SIZE`, default: 5).
    pub pool_size: u32,
    /// Raw backend selection values (`DB_TYPE`, `DATABASE_URL`, `DATABASE_PATH`).
    pub backend_sources: BackendSources,
    /// YAML file providing the fallback `DB_TYPE`.
    pub config_path: PathBuf,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `OWNER_ID` - Owner identity (default: 0, which denies everyone)
    /// - `DB_TYPE` - `postgres` or `sqlite` (default: config file, then `sqlite`)
    /// - `DATABASE_URL` - PostgreSQL connection string
    /// - `DATABASE_PATH` - SQLite database path (default: "database.db")
    /// - `DATABASE_POOL_SIZE` - PostgreSQL pool size (default: 5)
    pub fn from_env(config_path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok(), config_path)
    }

    /// Same as [`Config::from_env`], reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F, config_path: impl Into<PathBuf>) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let owner_id = match lookup("OWNER_ID").filter(|v| !v.trim().is_empty()) {
            Some(value) => value
                .trim()
                .parse::<UserId>()
                .map_err(|_| ConfigError::InvalidValue {
                    name: "OWNER_ID",
                    value,
                })?,
            None => UserId::UNSET,
        };

        let pool_size = match lookup("DATABASE_POOL_SIZE").filter(|v| !v.trim().is_empty()) {
            Some(value) => match value.trim().parse::<u32>() {
                Ok(size) if size > 0 => size,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        name: "DATABASE_POOL_SIZE",
                        value,
                    })
                }
            },
            None => DEFAULT_POOL_SIZE,
        };

        Ok(Self {
            owner_id,
            pool_size,
            backend_sources: BackendSources {
                db_type: lookup("DB_TYPE"),
                database_url: lookup("DATABASE_URL"),
                database_path: lookup("DATABASE_PATH"),
            },
            config_path: config_path.into(),
        })
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    #[serde(rename = "DB_TYPE")]
    db_type: Option<String>,
}

/// Reads the `DB_TYPE` key from a YAML config file.
///
/// A missing file yields `Ok(None)`. Other keys in the file are ignored.
pub fn read_file_db_type(path: &Path) -> Result<Option<String>, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "Config file not found, skipping");
            return Ok(None);
        }
        Err(source) => {
            return Err(ConfigError::FileRead {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    if content.trim().is_empty() {
        return Ok(None);
    }

    let file: FileConfig =
        serde_yaml::from_str(&content).map_err(|source| ConfigError::FileParse {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(file.db_type)
}
