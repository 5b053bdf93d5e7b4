use async_trait::async_trait;

use crate::admin::UserId;

use super::Result;

/// Persistent admin allow-list.
///
/// Every implementation treats the allow-list as a set and keeps no
/// in-memory copy of it: each call goes to the backend.
#[async_trait]
pub trait AdminRepository: Send + Sync {
    /// Creates the `admins` table if it does not exist. Safe to repeat.
    async fn ensure_schema(&self) -> Result<()>;

    /// Adds a user. Adding an existing admin is a no-op.
    async fn add_admin(&self, user_id: UserId) -> Result<()>;

    /// Removes a user. Removing a user who is not an admin is a no-op.
    async fn remove_admin(&self, user_id: UserId) -> Result<()>;

    /// Lists every admin, in no particular order.
    async fn list_admins(&self) -> Result<Vec<UserId>>;

    /// Returns whether the user is currently an admin.
    async fn is_admin(&self, user_id: UserId) -> Result<bool>;
}
