//! One-time backend resolution.

use std::{path::PathBuf, sync::OnceLock};

use adminbot_core::backend::{select_backend, BackendConfig, BackendSources};

use crate::config::{read_file_db_type, ConfigError};

/// Resolves the storage backend once and caches the result.
///
/// Resolution only reads its inputs, so two threads racing on the first
/// call compute the same value; the first one stored wins and both callers
/// get a reference to it. Failures are not cached.
#[derive(Debug)]
pub struct BackendResolver {
    sources: BackendSources,
    config_path: PathBuf,
    resolved: OnceLock<BackendConfig>,
}

impl BackendResolver {
    pub fn new(sources: BackendSources, config_path: impl Into<PathBuf>) -> Self {
        Self {
            sources,
            config_path: config_path.into(),
            resolved: OnceLock::new(),
        }
    }

    pub fn resolve(&self) -> Result<&BackendConfig, ConfigError> {
        if let Some(config) = self.resolved.get() {
            return Ok(config);
        }

        let config = select_backend(&self.sources, || read_file_db_type(&self.config_path))?;

        tracing::debug!(
            backend = %config.kind,
            config_path = %self.config_path.display(),
            "Resolved storage backend"
        );

        Ok(self.resolved.get_or_init(|| config))
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use adminbot_core::backend::BackendKind;

    use super::*;

    #[test]
    fn resolves_default_backend() {
        let dir = tempfile::tempdir().unwrap();
        let resolver = BackendResolver::new(BackendSources::default(), dir.path().join("none.yaml"));

        let config = resolver.resolve().unwrap();

        assert_eq!(*config, BackendConfig::sqlite("database.db"));
    }

    #[test]
    fn resolution_is_memoized() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "DB_TYPE: sqlite\n").unwrap();
        let resolver = BackendResolver::new(BackendSources::default(), &path);

        let first = resolver.resolve().unwrap();
        // Changing the file after the first resolution has no effect.
        fs::write(&path, "DB_TYPE: postgres\n").unwrap();
        let second = resolver.resolve().unwrap();

        assert!(std::ptr::eq(first, second));
        assert_eq!(second.kind, BackendKind::Sqlite);
    }

    #[test]
    fn env_value_beats_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "DB_TYPE: postgres\n").unwrap();
        let sources = BackendSources {
            db_type: Some("SQLite".to_string()),
            database_path: Some("bot.db".to_string()),
            ..Default::default()
        };

        let resolver = BackendResolver::new(sources, &path);

        assert_eq!(*resolver.resolve().unwrap(), BackendConfig::sqlite("bot.db"));
    }

    #[test]
    fn config_file_beats_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "DB_TYPE: postgres\n").unwrap();

        let resolver = BackendResolver::new(BackendSources::default(), &path);

        assert_eq!(resolver.resolve().unwrap().kind, BackendKind::Postgres);
    }

    #[test]
    fn malformed_file_is_an_error_and_not_cached() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "DB_TYPE: [\n").unwrap();
        let resolver = BackendResolver::new(BackendSources::default(), &path);

        assert!(matches!(
            resolver.resolve(),
            Err(ConfigError::FileParse { .. })
        ));

        fs::write(&path, "DB_TYPE: sqlite\n").unwrap();
        assert_eq!(resolver.resolve().unwrap().kind, BackendKind::Sqlite);
    }

    #[test]
    fn concurrent_first_resolution_agrees() {
        let dir = tempfile::tempdir().unwrap();
        let resolver = BackendResolver::new(BackendSources::default(), dir.path().join("c.yaml"));

        let results: Vec<BackendConfig> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| scope.spawn(|| resolver.resolve().unwrap().clone()))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert!(results.iter().all(|c| *c == BackendConfig::sqlite("database.db")));
    }
}
