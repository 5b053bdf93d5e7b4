//! Owner-managed admin allow-list for command-driven chat bots.
//!
//! The pure pieces (identities, parsing, replies, backend selection, the
//! repository trait) live in `adminbot_core`. This crate adds configuration,
//! the storage backends, the command handlers and a console transport.

pub mod app;
pub mod config;
pub mod console;
pub mod dispatch;
pub mod error;
pub mod handlers;
pub mod resolver;
pub mod state;
pub mod storage;
