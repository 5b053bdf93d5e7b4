//! Handlers for `/add_admin`, `/rm_admin` and `/list_admin`.
//!
//! These run behind the owner guard; see [`crate::app::create_router`].

use std::sync::Arc;

use async_trait::async_trait;

use adminbot_core::admin::{
    format_added, format_admin_list, format_removed, parse_user_id_argument, AdminCommand,
    STORAGE_BUSY, STORAGE_FAILURE,
};
use adminbot_core::storage::{AdminRepository, RepositoryError};

use super::CommandHandler;
use crate::dispatch::Message;

/// `/add_admin <user_id>`
pub struct AddAdmin {
    repo: Arc<dyn AdminRepository>,
}

impl AddAdmin {
    pub fn new(repo: Arc<dyn AdminRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl CommandHandler for AddAdmin {
    async fn handle(&self, message: &Message) -> String {
        let user_id = match parse_user_id_argument(&message.text) {
            Ok(user_id) => user_id,
            Err(e) => return usage(AdminCommand::Add, &e),
        };

        match self.repo.add_admin(user_id).await {
            Ok(()) => format_added(user_id),
            Err(e) => storage_failure(AdminCommand::Add, &e),
        }
    }
}

/// `/rm_admin <user_id>`
///
/// Replies the same way whether or not the user was an admin.
pub struct RemoveAdmin {
    repo: Arc<dyn AdminRepository>,
}

impl RemoveAdmin {
    pub fn new(repo: Arc<dyn AdminRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl CommandHandler for RemoveAdmin {
    async fn handle(&self, message: &Message) -> String {
        let user_id = match parse_user_id_argument(&message.text) {
            Ok(user_id) => user_id,
            Err(e) => return usage(AdminCommand::Remove, &e),
        };

        match self.repo.remove_admin(user_id).await {
            Ok(()) => format_removed(user_id),
            Err(e) => storage_failure(AdminCommand::Remove, &e),
        }
    }
}

/// `/list_admin`. Arguments are ignored.
pub struct ListAdmins {
    repo: Arc<dyn AdminRepository>,
}

impl ListAdmins {
    pub fn new(repo: Arc<dyn AdminRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl CommandHandler for ListAdmins {
    async fn handle(&self, _message: &Message) -> String {
        match self.repo.list_admins().await {
            Ok(admins) => format_admin_list(&admins),
            Err(e) => storage_failure(AdminCommand::List, &e),
        }
    }
}

fn usage(command: AdminCommand, error: &dyn std::error::Error) -> String {
    tracing::debug!(command = %command, error = %error, "Rejected command arguments");
    command.usage().to_string()
}

fn storage_failure(command: AdminCommand, error: &RepositoryError) -> String {
    tracing::error!(command = %command, error = %error, "Storage operation failed");

    match error {
        RepositoryError::Busy(_) => STORAGE_BUSY.to_string(),
        _ => STORAGE_FAILURE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use adminbot_core::admin::UserId;

    use super::super::testing::{FailingRepository, MemoryRepository};
    use super::*;

    fn owner_message(text: &str) -> Message {
        Message::new(Some(UserId::new(1)), text)
    }

    #[tokio::test]
    async fn test_add_admin_replies_and_stores() {
        let repo = Arc::new(MemoryRepository::default());
        let handler = AddAdmin::new(repo.clone());

        let reply = handler.handle(&owner_message("/add_admin 2")).await;

        assert_eq!(reply, "Added admin 2");
        assert_eq!(repo.snapshot().await, vec![UserId::new(2)]);
    }

    #[tokio::test]
    async fn test_add_admin_twice_keeps_one_entry() {
        let repo = Arc::new(MemoryRepository::default());
        let handler = AddAdmin::new(repo.clone());

        handler.handle(&owner_message("/add_admin 2")).await;
        let reply = handler.handle(&owner_message("/add_admin 2")).await;

        assert_eq!(reply, "Added admin 2");
        assert_eq!(repo.snapshot().await, vec![UserId::new(2)]);
    }

    #[tokio::test]
    async fn test_add_admin_malformed_input_is_usage() {
        let repo = Arc::new(MemoryRepository::default());
        let handler = AddAdmin::new(repo.clone());

        for text in ["/add_admin", "/add_admin 2 3", "/add_admin two", "/add_admin 1e3"] {
            let reply = handler.handle(&owner_message(text)).await;
            assert_eq!(reply, "Usage: /add_admin <user_id>", "input: {text}");
        }

        assert!(repo.snapshot().await.is_empty());
        assert_eq!(repo.writes(), 0);
    }

    #[tokio::test]
    async fn test_rm_admin_absent_user_still_confirms() {
        let repo = Arc::new(MemoryRepository::default());
        let handler = RemoveAdmin::new(repo.clone());

        let reply = handler.handle(&owner_message("/rm_admin 99")).await;

        assert_eq!(reply, "Removed admin 99");
        assert!(repo.snapshot().await.is_empty());
    }

    #[tokio::test]
    async fn test_rm_admin_removes_existing() {
        let repo = Arc::new(MemoryRepository::with_admins([2, 3]));
        let handler = RemoveAdmin::new(repo.clone());

        let reply = handler.handle(&owner_message("/rm_admin 2")).await;

        assert_eq!(reply, "Removed admin 2");
        assert_eq!(repo.snapshot().await, vec![UserId::new(3)]);
    }

    #[tokio::test]
    async fn test_rm_admin_malformed_input_is_usage() {
        let repo = Arc::new(MemoryRepository::with_admins([2]));
        let handler = RemoveAdmin::new(repo.clone());

        for text in ["/rm_admin", "/rm_admin 2 2", "/rm_admin @bob"] {
            let reply = handler.handle(&owner_message(text)).await;
            assert_eq!(reply, "Usage: /rm_admin <user_id>", "input: {text}");
        }

        assert_eq!(repo.snapshot().await, vec![UserId::new(2)]);
    }

    #[tokio::test]
    async fn test_list_admins_empty() {
        let handler = ListAdmins::new(Arc::new(MemoryRepository::default()));

        assert_eq!(handler.handle(&owner_message("/list_admin")).await, "No admins.");
    }

    #[tokio::test]
    async fn test_list_admins_joins_ids() {
        let handler = ListAdmins::new(Arc::new(MemoryRepository::with_admins([5, 2, 9])));

        let reply = handler.handle(&owner_message("/list_admin extra words")).await;

        let mut ids: Vec<&str> = reply.split(", ").collect();
        ids.sort();
        assert_eq!(ids, vec!["2", "5", "9"]);
    }

    #[tokio::test]
    async fn test_storage_failure_is_generic_reply() {
        let repo: Arc<dyn AdminRepository> = Arc::new(FailingRepository::new(
            RepositoryError::ConnectionFailed("refused".to_string()),
        ));

        assert_eq!(
            AddAdmin::new(repo.clone())
                .handle(&owner_message("/add_admin 2"))
                .await,
            STORAGE_FAILURE
        );
        assert_eq!(
            RemoveAdmin::new(repo.clone())
                .handle(&owner_message("/rm_admin 2"))
                .await,
            STORAGE_FAILURE
        );
        assert_eq!(
            ListAdmins::new(repo)
                .handle(&owner_message("/list_admin"))
                .await,
            STORAGE_FAILURE
        );
    }

    #[tokio::test]
    async fn test_busy_storage_asks_to_retry() {
        let repo = Arc::new(FailingRepository::new(RepositoryError::Busy(
            "database is locked".to_string(),
        )));

        let reply = AddAdmin::new(repo)
            .handle(&owner_message("/add_admin 2"))
            .await;

        assert_eq!(reply, STORAGE_BUSY);
    }

    #[tokio::test]
    async fn test_usage_does_not_touch_failing_storage() {
        let repo = Arc::new(FailingRepository::new(RepositoryError::QueryFailed(
            "boom".to_string(),
        )));

        let reply = AddAdmin::new(repo).handle(&owner_message("/add_admin")).await;

        assert_eq!(reply, "Usage: /add_admin <user_id>");
    }
}
