//! Backend selection precedence.
//!
//! The backend kind comes from, in order: the `DB_TYPE` environment value,
//! the `DB_TYPE` key of the config file, and finally [`DEFAULT_BACKEND`].
//! The config file is only consulted when the environment has no value.

use super::{BackendConfig, BackendKind, DEFAULT_BACKEND, DEFAULT_SQLITE_PATH};

/// Raw values read from the environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BackendSources {
    pub db_type: Option<String>,
    pub database_url: Option<String>,
    pub database_path: Option<String>,
}

/// Picks the backend and its target.
///
/// `file_db_type` is called at most once, and only when `sources.db_type`
/// is absent or blank. Its error is returned unchanged.
pub fn select_backend<E>(
    sources: &BackendSources,
    file_db_type: impl FnOnce() -> Result<Option<String>, E>,
) -> Result<BackendConfig, E> {
    let selector = match non_blank(sources.db_type.as_deref()) {
        Some(selector) => selector.to_string(),
        None => match file_db_type()? {
            Some(selector) if !selector.trim().is_empty() => selector,
            _ => DEFAULT_BACKEND.to_string(),
        },
    };

    let kind = BackendKind::from_selector(&selector);
    let target = match kind {
        BackendKind::Postgres => non_blank(sources.database_url.as_deref()).map(str::to_string),
        BackendKind::Sqlite => Some(
            non_blank(sources.database_path.as_deref())
                .unwrap_or(DEFAULT_SQLITE_PATH)
                .to_string(),
        ),
        BackendKind::Unsupported(_) => None,
    };

    Ok(BackendConfig { kind, target })
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
