mod select;
mod types;

pub use select::{select_backend, BackendSources};
pub use types::{BackendConfig, BackendKind, DEFAULT_BACKEND, DEFAULT_SQLITE_PATH};
