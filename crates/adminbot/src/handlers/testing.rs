//! Repository doubles for handler tests.

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use adminbot_core::admin::UserId;
use adminbot_core::storage::{AdminRepository, RepositoryError, Result};

/// Set-backed repository that also counts write calls.
#[derive(Debug, Default)]
pub struct MemoryRepository {
    admins: RwLock<HashSet<UserId>>,
    writes: AtomicUsize,
}

impl MemoryRepository {
    pub fn with_admins(ids: impl IntoIterator<Item = i64>) -> Self {
        Self {
            admins: RwLock::new(ids.into_iter().map(UserId::new).collect()),
            writes: AtomicUsize::new(0),
        }
    }

    /// Current admins, sorted.
    pub async fn snapshot(&self) -> Vec<UserId> {
        let mut admins: Vec<UserId> = self.admins.read().await.iter().copied().collect();
        admins.sort();
        admins
    }

    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AdminRepository for MemoryRepository {
    async fn ensure_schema(&self) -> Result<()> {
        Ok(())
    }

    async fn add_admin(&self, user_id: UserId) -> Result<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.admins.write().await.insert(user_id);
        Ok(())
    }

    async fn remove_admin(&self, user_id: UserId) -> Result<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.admins.write().await.remove(&user_id);
        Ok(())
    }

    async fn list_admins(&self) -> Result<Vec<UserId>> {
        Ok(self.admins.read().await.iter().copied().collect())
    }

    async fn is_admin(&self, user_id: UserId) -> Result<bool> {
        Ok(self.admins.read().await.contains(&user_id))
    }
}

/// Repository whose every call fails with the same error.
#[derive(Debug)]
pub struct FailingRepository {
    error: RepositoryError,
}

impl FailingRepository {
    pub fn new(error: RepositoryError) -> Self {
        Self { error }
    }
}

#[async_trait]
impl AdminRepository for FailingRepository {
    async fn ensure_schema(&self) -> Result<()> {
        Err(self.error.clone())
    }

    async fn add_admin(&self, _user_id: UserId) -> Result<()> {
        Err(self.error.clone())
    }

    async fn remove_admin(&self, _user_id: UserId) -> Result<()> {
        Err(self.error.clone())
    }

    async fn list_admins(&self) -> Result<Vec<UserId>> {
        Err(self.error.clone())
    }

    async fn is_admin(&self, _user_id: UserId) -> Result<bool> {
        Err(self.error.clone())
    }
}
