use crate::error::SqliteBatchError;

use super::row::SqlRow;

/// Successful engine output for one statement, before normalization.
///
/// The engine reports two shapes: a row set with the connection's
/// rows-modified counter, or mutation metadata with no rows. [`normalize`]
/// folds both, plus the failure case, into one [`StatementOutcome`].
#[derive(Debug)]
pub(crate) enum Execution {
    RowSet {
        rows: Vec<SqlRow>,
        rows_modified: u64,
    },
    Mutation {
        last_insert_rowid: i64,
        rows_affected: u64,
    },
}

/// The uniform per-statement outcome of a batch.
///
/// Exactly one of the two sides is populated: either `error`, or the success
/// fields (`insert_id`/`rows_affected`/`rows`). Construction goes through
/// [`normalize`], so the exclusivity holds for every record a batch returns.
#[derive(Debug, Clone)]
pub struct StatementOutcome {
    error: Option<String>,
    insert_id: Option<i64>,
    rows_affected: u64,
    rows: Vec<SqlRow>,
}

impl StatementOutcome {
    /// True when the statement executed (or was attempted) without error.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// The failure text: the fixed read-only rejection, or the engine's own
    /// message passed through opaquely.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Rowid of the last inserted row, for successful mutations on a
    /// connection that has inserted at least once. The engine keeps this per
    /// connection, so a non-insert write that follows an insert still reports
    /// the earlier rowid.
    #[must_use]
    pub fn insert_id(&self) -> Option<i64> {
        self.insert_id
    }

    /// Rows touched by the statement. For reads this is the connection's
    /// rows-modified counter at execution time, which a pure read leaves
    /// unchanged. May be imprecise for multi-statement SQL text submitted as
    /// one request; that caveat comes with the engine counter.
    #[must_use]
    pub fn rows_affected(&self) -> u64 {
        self.rows_affected
    }

    /// The rows produced by a read, flattened across embedded result sets in
    /// the order the engine reported them. Empty for writes and for reads
    /// that matched nothing.
    #[must_use]
    pub fn rows(&self) -> &[SqlRow] {
        &self.rows
    }
}

/// Fold an execution result into the uniform record shape.
///
/// Pure function, no I/O. A failure yields a record carrying only the error
/// text; a success never carries one.
pub(crate) fn normalize(execution: Result<Execution, SqliteBatchError>) -> StatementOutcome {
    match execution {
        Ok(Execution::RowSet {
            rows,
            rows_modified,
        }) => StatementOutcome {
            error: None,
            insert_id: None,
            rows_affected: rows_modified,
            rows,
        },
        Ok(Execution::Mutation {
            last_insert_rowid,
            rows_affected,
        }) => StatementOutcome {
            error: None,
            // The engine reports 0 when the connection has never inserted.
            insert_id: (last_insert_rowid != 0).then_some(last_insert_rowid),
            rows_affected,
            rows: Vec::new(),
        },
        Err(err) => StatementOutcome {
            error: Some(err.to_string()),
            insert_id: None,
            rows_affected: 0,
            rows: Vec::new(),
        },
    }
}
