use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, Sender};
use std::thread;

use tokio::sync::oneshot;

use crate::error::SqliteBatchError;
use crate::results::StatementOutcome;
use crate::sqlite::config::SqliteOptions;
use crate::statement::StatementRequest;
use crate::types::AccessMode;

use super::channel::Command;
use super::dispatcher::run_sqlite_worker;

static NEXT_HANDLE_ID: AtomicU64 = AtomicU64::new(1);

pub(super) struct SqliteWorker {
    sender: Sender<Command>,
    handle_id: u64,
}

impl SqliteWorker {
    /// Spawn the worker thread. The returned receiver resolves once the
    /// thread has opened the connection, or with the open error if it
    /// couldn't.
    pub(super) fn spawn(
        options: SqliteOptions,
    ) -> Result<(Self, oneshot::Receiver<Result<(), SqliteBatchError>>), SqliteBatchError> {
        let (sender, receiver) = mpsc::channel::<Command>();
        let (ready_tx, ready_rx) = oneshot::channel();
        let handle_id = NEXT_HANDLE_ID.fetch_add(1, Ordering::Relaxed);
        thread::Builder::new()
            .name(format!("sqlite-batch-{handle_id}"))
            .spawn(move || run_sqlite_worker(&options, handle_id, &receiver, ready_tx))
            .map_err(|err| {
                SqliteBatchError::ConnectionError(format!(
                    "failed to spawn SQLite worker thread: {err}"
                ))
            })?;

        Ok((Self { sender, handle_id }, ready_rx))
    }

    pub(super) fn handle_id(&self) -> u64 {
        self.handle_id
    }

    fn send_command(&self, command: Command) -> Result<(), SqliteBatchError> {
        self.sender
            .send(command)
            .map_err(|_| connection_error("SQLite worker closed"))
    }

    pub(super) async fn request<T>(
        &self,
        build: impl FnOnce(oneshot::Sender<Result<T, SqliteBatchError>>) -> Command,
        drop_message: &'static str,
    ) -> Result<T, SqliteBatchError> {
        let (tx, rx) = oneshot::channel();
        self.send_command(build(tx))?;
        rx.await.map_err(|_| connection_error(drop_message))?
    }

    pub(super) async fn run_batch(
        &self,
        requests: Vec<StatementRequest>,
        mode: AccessMode,
    ) -> Result<Vec<StatementOutcome>, SqliteBatchError> {
        self.request(
            |respond_to| Command::RunBatch {
                requests,
                mode,
                respond_to,
            },
            "SQLite worker dropped while running batch",
        )
        .await
    }
}

impl Drop for SqliteWorker {
    fn drop(&mut self) {
        let _ = self.sender.send(Command::Shutdown);
    }
}

fn connection_error(message: &str) -> SqliteBatchError {
    SqliteBatchError::ConnectionError(message.into())
}
