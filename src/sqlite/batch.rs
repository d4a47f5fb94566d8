//! The ordered execution loop: classify, gate, dispatch, normalize.

use rusqlite::Connection;
use tracing::debug;

use crate::classifier::{StatementKind, classify};
use crate::error::SqliteBatchError;
use crate::results::{StatementOutcome, normalize};
use crate::statement::StatementRequest;
use crate::types::AccessMode;

use super::engine::{run_mutation, run_row_set};
use super::params::to_engine_values;

/// Run an ordered batch against the worker-owned connection.
///
/// Statements execute strictly in submission order; each one sees the side
/// effects of everything before it. Failures are folded into the statement's
/// own outcome and the loop continues, so the output is always index-aligned
/// with `requests`. No transaction is opened here: a failure does not roll
/// back earlier statements, and callers wanting atomicity submit an explicit
/// `BEGIN`/`COMMIT` pair as part of the batch.
pub(crate) fn run_batch(
    conn: &Connection,
    requests: &[StatementRequest],
    mode: AccessMode,
) -> Vec<StatementOutcome> {
    let mut outcomes = Vec::with_capacity(requests.len());
    for (index, request) in requests.iter().enumerate() {
        let kind = classify(&request.sql);

        // The gate rejects before the engine is involved at all.
        if mode.is_read_only() && kind == StatementKind::Write {
            debug!(index, "rejected write-classified statement in read-only mode");
            outcomes.push(normalize(Err(SqliteBatchError::ReadOnlyViolation)));
            continue;
        }

        let params = to_engine_values(&request.args);
        let execution = match kind {
            StatementKind::Read => run_row_set(conn, &request.sql, &params),
            StatementKind::Write => run_mutation(conn, &request.sql, &params),
        };
        outcomes.push(normalize(execution));
    }
    outcomes
}
