//! Line-oriented console transport.
//!
//! Each input line is `<caller> <command text>`, where `<caller>` is an
//! integer user id or `-` for a message without sender identity. Replies are
//! written as `<caller>: <reply>`.

use std::{future::Future, io, sync::Arc};

use async_trait::async_trait;
use tokio::{
    io::{AsyncBufRead, AsyncBufReadExt, AsyncWriteExt},
    sync::Mutex,
    task::JoinSet,
};

use adminbot_core::admin::UserId;

use crate::dispatch::{Message, Responder, Router};

/// Marker for a message with no sender identity.
const ANONYMOUS: &str = "-";

/// Parses one console line. Blank lines, and lines with nothing after the
/// caller token, yield `None`.
pub fn parse_line(line: &str) -> Option<Message> {
    let line = line.trim();
    let (caller, text) = line.split_once(char::is_whitespace)?;
    let text = text.trim_start();
    if text.is_empty() {
        return None;
    }

    let caller = if caller == ANONYMOUS {
        None
    } else {
        match caller.parse::<UserId>() {
            Ok(id) => Some(id),
            Err(_) => {
                tracing::warn!(caller = %caller, "Unparseable caller, treating as anonymous");
                None
            }
        }
    };

    Some(Message::new(caller, text))
}

fn caller_label(caller: Option<UserId>) -> String {
    caller.map_or_else(|| ANONYMOUS.to_string(), |id| id.to_string())
}

/// Writes replies to stdout, one per line.
#[derive(Debug)]
pub struct StdoutResponder {
    stdout: Mutex<tokio::io::Stdout>,
}

impl StdoutResponder {
    pub fn new() -> Self {
        Self {
            stdout: Mutex::new(tokio::io::stdout()),
        }
    }
}

impl Default for StdoutResponder {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Responder for StdoutResponder {
    async fn answer(&self, text: String) {
        let mut stdout = self.stdout.lock().await;
        let line = format!("{text}\n");

        if let Err(e) = stdout.write_all(line.as_bytes()).await {
            tracing::warn!(error = %e, "Failed to write reply");
            return;
        }
        if let Err(e) = stdout.flush().await {
            tracing::warn!(error = %e, "Failed to flush reply");
        }
    }
}

/// Prefixes each reply with the caller it answers.
pub struct CallerResponder {
    caller: Option<UserId>,
    output: Arc<dyn Responder>,
}

impl CallerResponder {
    pub fn new(caller: Option<UserId>, output: Arc<dyn Responder>) -> Self {
        Self { caller, output }
    }
}

#[async_trait]
impl Responder for CallerResponder {
    async fn answer(&self, text: String) {
        let label = caller_label(self.caller);
        self.output.answer(format!("{label}: {text}")).await;
    }
}

/// Reads commands from `reader` until EOF or `shutdown` completes.
///
/// Every line is dispatched on its own task, so slow commands do not hold
/// up the ones behind them. In-flight commands are awaited before
/// returning. Returns the number of messages dispatched.
pub async fn run<R, F>(
    router: Arc<Router>,
    reader: R,
    output: Arc<dyn Responder>,
    shutdown: F,
) -> io::Result<u64>
where
    R: AsyncBufRead + Unpin,
    F: Future<Output = ()>,
{
    let mut lines = reader.lines();
    let mut tasks = JoinSet::new();
    let mut dispatched = 0u64;
    tokio::pin!(shutdown);

    loop {
        let line = tokio::select! {
            line = lines.next_line() => line?,
            _ = &mut shutdown => {
                tracing::info!("Shutdown requested, no longer reading commands");
                break;
            }
        };

        let Some(line) = line else {
            tracing::debug!("End of input");
            break;
        };

        let Some(message) = parse_line(&line) else {
            continue;
        };

        dispatched += 1;
        let router = router.clone();
        let responder = CallerResponder::new(message.caller, output.clone());
        tasks.spawn(async move {
            if !router.dispatch(&message, &responder).await {
                tracing::debug!(text = %message.text, "Ignored message");
            }
        });

        // Reap finished tasks so the set does not grow with the input.
        while let Some(result) = tasks.try_join_next() {
            log_join_error(result);
        }
    }

    while let Some(result) = tasks.join_next().await {
        log_join_error(result);
    }

    Ok(dispatched)
}

fn log_join_error(result: Result<(), tokio::task::JoinError>) {
    if let Err(e) = result {
        tracing::error!(error = %e, "Command task failed");
    }
}
