//! Command routing.
//!
//! A minimal stand-in for a chat framework's dispatcher: it maps `/command`
//! names to handlers and hands each reply to a [`Responder`].

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use adminbot_core::admin::{command_name, UserId};

use crate::handlers::CommandHandler;

/// An incoming text message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// Sender identity. `None` when the platform did not provide one.
    pub caller: Option<UserId>,
    pub text: String,
}

impl Message {
    pub fn new(caller: Option<UserId>, text: impl Into<String>) -> Self {
        Self {
            caller,
            text: text.into(),
        }
    }
}

/// Delivers a reply to the sender of the message being handled.
///
/// Delivery is fire-and-forget: the handler gets no acknowledgment.
#[async_trait]
pub trait Responder: Send + Sync {
    async fn answer(&self, text: String);
}

/// Keeps every reply in memory, in delivery order.
#[derive(Debug, Default)]
pub struct ReplyLog {
    replies: Mutex<Vec<String>>,
}

impl ReplyLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn replies(&self) -> Vec<String> {
        self.replies.lock().await.clone()
    }

    pub async fn last(&self) -> Option<String> {
        self.replies.lock().await.last().cloned()
    }
}

#[async_trait]
impl Responder for ReplyLog {
    async fn answer(&self, text: String) {
        self.replies.lock().await.push(text);
    }
}

/// Routes messages to handlers by command name.
#[derive(Default)]
pub struct Router {
    handlers: HashMap<String, Box<dyn CommandHandler>>,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` for `/name`. A later registration for the same
    /// name replaces the earlier one.
    pub fn route(mut self, name: &str, handler: impl CommandHandler + 'static) -> Self {
        self.handlers.insert(name.to_string(), Box::new(handler));
        self
    }

    pub fn has_route(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    /// Runs the handler for the message's command and sends its reply.
    ///
    /// Returns `false` without replying when the text is not a command or
    /// no handler is registered for it.
    pub async fn dispatch(&self, message: &Message, responder: &dyn Responder) -> bool {
        let Some(name) = command_name(&message.text) else {
            return false;
        };

        let Some(handler) = self.handlers.get(name) else {
            tracing::debug!(command = %name, "No handler registered");
            return false;
        };

        let reply = handler.handle(message).await;
        responder.answer(reply).await;
        true
    }
}
