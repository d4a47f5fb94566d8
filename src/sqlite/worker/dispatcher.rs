use std::sync::mpsc::Receiver;

use tokio::sync::oneshot;
use tracing::debug;

use crate::error::SqliteBatchError;
use crate::sqlite::batch::run_batch;
use crate::sqlite::config::{SqliteOptions, open_connection};

use super::channel::Command;

/// Worker loop. Opens the connection, reports readiness, then serves
/// commands in arrival order until shutdown. The connection never leaves
/// this thread.
pub(super) fn run_sqlite_worker(
    options: &SqliteOptions,
    handle_id: u64,
    receiver: &Receiver<Command>,
    ready: oneshot::Sender<Result<(), SqliteBatchError>>,
) {
    let conn = match open_connection(options) {
        Ok(conn) => conn,
        Err(err) => {
            let _ = ready.send(Err(err));
            return;
        }
    };
    if ready.send(Ok(())).is_err() {
        // Handle was dropped before the connection opened.
        return;
    }
    debug!(handle_id, db_path = %options.db_path, "sqlite worker ready");

    while let Ok(command) = receiver.recv() {
        match command {
            Command::RunBatch {
                requests,
                mode,
                respond_to,
            } => {
                debug!(handle_id, statements = requests.len(), ?mode, "running batch");
                let _ = respond_to.send(Ok(run_batch(&conn, &requests, mode)));
            }
            Command::Shutdown => break,
        }
    }
    debug!(handle_id, "sqlite worker shutting down");
}
