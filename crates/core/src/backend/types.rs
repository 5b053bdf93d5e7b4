/// Backend selector used when neither the environment nor the config file
/// names one.
pub const DEFAULT_BACKEND: &str = "sqlite";

/// SQLite database file used when `DATABASE_PATH` is not set.
pub const DEFAULT_SQLITE_PATH: &str = "database.db";

/// Storage engine holding the admin allow-list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BackendKind {
    /// Networked PostgreSQL server.
    Postgres,
    /// Embedded SQLite file.
    Sqlite,
    /// Any other selector, kept verbatim (lower-cased) so startup can
    /// report it.
    Unsupported(String),
}

impl BackendKind {
    /// Normalizes a `DB_TYPE` value. Unknown values are not rejected here.
    pub fn from_selector(selector: &str) -> Self {
        let normalized = selector.trim().to_lowercase();
        match normalized.as_str() {
            "postgres" => Self::Postgres,
            "sqlite" => Self::Sqlite,
            _ => Self::Unsupported(normalized),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Postgres => "postgres",
            Self::Sqlite => "sqlite",
            Self::Unsupported(selector) => selector,
        }
    }
}

impl std::fmt::Display for BackendKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A resolved backend and its connection target.
///
/// The target is a connection string for PostgreSQL and a file path for
/// SQLite. It is `None` when the backend has no usable default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    pub kind: BackendKind,
    pub target: Option<String>,
}

impl BackendConfig {
    pub fn postgres(url: impl Into<String>) -> Self {
        Self {
            kind: BackendKind::Postgres,
            target: Some(url.into()),
        }
    }

    pub fn sqlite(path: impl Into<String>) -> Self {
        Self {
            kind: BackendKind::Sqlite,
            target: Some(path.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_selectors_are_case_insensitive() {
        assert_eq!(BackendKind::from_selector("Postgres"), BackendKind::Postgres);
        assert_eq!(BackendKind::from_selector(" SQLITE "), BackendKind::Sqlite);
    }

    #[test]
    fn unknown_selector_is_kept_lower_cased() {
        assert_eq!(
            BackendKind::from_selector("MySQL"),
            BackendKind::Unsupported("mysql".to_string())
        );
        assert_eq!(BackendKind::from_selector("MySQL").to_string(), "mysql");
    }
}
