use std::sync::Arc;

use adminbot_core::admin::{AdminCommand, UserId};
use adminbot_core::storage::AdminRepository;

use crate::{
    dispatch::Router,
    handlers::{owner_only, AddAdmin, ListAdmins, RemoveAdmin},
};

/// Create the command router with the owner-guarded admin commands.
pub fn admin_router(owner: UserId, repo: Arc<dyn AdminRepository>) -> Router {
    Router::new()
        .route(
            AdminCommand::Add.name(),
            owner_only(owner, AddAdmin::new(repo.clone())),
        )
        .route(
            AdminCommand::Remove.name(),
            owner_only(owner, RemoveAdmin::new(repo.clone())),
        )
        .route(
            AdminCommand::List.name(),
            owner_only(owner, ListAdmins::new(repo)),
        )
}
