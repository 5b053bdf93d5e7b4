//! Command handlers.
//!
//! Handlers return their reply text; the router delivers it. None of them
//! fail: parse errors become usage replies and storage errors become a
//! generic failure reply.

mod admin;
mod guard;

#[cfg(test)]
pub(crate) mod testing;

use async_trait::async_trait;

use crate::dispatch::Message;

pub use admin::{AddAdmin, ListAdmins, RemoveAdmin};
pub use guard::{owner_only, Guarded};

/// Handles one command and produces the reply text.
#[async_trait]
pub trait CommandHandler: Send + Sync {
    async fn handle(&self, message: &Message) -> String;
}
