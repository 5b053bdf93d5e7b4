//! Authorization wrapper for privileged handlers.

use async_trait::async_trait;

use adminbot_core::admin::{Guard, OwnerGuard, UserId, ACCESS_DENIED};

use super::CommandHandler;
use crate::dispatch::Message;

/// Runs `inner` only when `guard` admits the caller.
///
/// Every rejected caller, with or without an identity, gets the same
/// [`ACCESS_DENIED`] reply.
pub struct Guarded<G, H> {
    guard: G,
    inner: H,
}

impl<G, H> Guarded<G, H> {
    pub fn new(guard: G, inner: H) -> Self {
        Self { guard, inner }
    }
}

/// Restricts `handler` to `owner`.
pub fn owner_only<H: CommandHandler>(owner: UserId, handler: H) -> Guarded<OwnerGuard, H> {
    Guarded::new(OwnerGuard::new(owner), handler)
}

#[async_trait]
impl<G, H> CommandHandler for Guarded<G, H>
where
    G: Guard,
    H: CommandHandler,
{
    async fn handle(&self, message: &Message) -> String {
        if !self.guard.check(message.caller) {
            tracing::warn!(
                caller = ?message.caller.map(UserId::get),
                "Access denied"
            );
            return ACCESS_DENIED.to_string();
        }

        self.inner.handle(message).await
    }
}
