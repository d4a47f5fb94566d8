use tokio::sync::oneshot;

use crate::error::SqliteBatchError;
use crate::results::StatementOutcome;
use crate::statement::StatementRequest;
use crate::types::AccessMode;

// The std mpsc channel doubles as the handle's FIFO queue: concurrent
// callers enqueue whole batches and the worker drains them one at a time.
pub(super) enum Command {
    RunBatch {
        requests: Vec<StatementRequest>,
        mode: AccessMode,
        respond_to: oneshot::Sender<Result<Vec<StatementOutcome>, SqliteBatchError>>,
    },
    Shutdown,
}
