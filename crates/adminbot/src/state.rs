//! Application state built once at startup.
//!
//! Resolves the backend, opens it, makes sure the schema exists and wires
//! the admin handlers onto a shared repository.

use std::sync::Arc;

use adminbot_core::admin::UserId;
use adminbot_core::backend::BackendConfig;
use adminbot_core::storage::AdminRepository;

use crate::{
    app::admin_router, config::Config, dispatch::Router, error::StartupError,
    resolver::BackendResolver, storage::StorageBackend,
};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    router: Arc<Router>,
    storage: Arc<StorageBackend>,
    backend: BackendConfig,
}

impl AppState {
    /// Opens storage and builds the router from `config`.
    ///
    /// Fails when the backend cannot be resolved or opened, or when the
    /// schema cannot be created. The backend is closed again in that last
    /// case.
    pub async fn initialize(config: &Config) -> Result<Self, StartupError> {
        let resolver = BackendResolver::new(
            config.backend_sources.clone(),
            config.config_path.clone(),
        );
        let backend = resolver.resolve()?.clone();

        let storage = StorageBackend::open(&backend, config.pool_size).await?;
        if let Err(e) = storage.ensure_schema().await {
            storage.close().await;
            return Err(e.into());
        }

        tracing::info!(
            backend = %backend.kind,
            owner = %config.owner_id,
            "Storage ready"
        );

        if config.owner_id == UserId::UNSET {
            tracing::warn!("OWNER_ID is not set; every admin command will be denied");
        }

        let storage = Arc::new(storage);
        let router = admin_router(config.owner_id, storage.clone());

        Ok(Self {
            router: Arc::new(router),
            storage,
            backend,
        })
    }

    pub fn router(&self) -> Arc<Router> {
        self.router.clone()
    }

    pub fn storage(&self) -> &StorageBackend {
        &self.storage
    }

    /// The backend selected at startup.
    pub fn backend(&self) -> &BackendConfig {
        &self.backend
    }

    /// Closes the storage backend.
    pub async fn shutdown(self) {
        tracing::info!(backend = %self.backend.kind, "Closing storage");
        self.storage.close().await;
    }
}
