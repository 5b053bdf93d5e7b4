//! Functional core for adminbot.
//!
//! Everything in this crate is free of I/O: domain types, command parsing,
//! reply formatting, the owner guard, backend selection, and the repository
//! abstraction implemented by the storage backends in the `adminbot` crate.

pub mod admin;
pub mod backend;
pub mod storage;
