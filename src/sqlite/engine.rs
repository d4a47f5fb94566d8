//! The two outbound engine operations: row-set execution and mutation
//! execution. Everything here is synchronous and runs on the worker thread
//! that owns the connection.

use std::sync::Arc;

use rusqlite::fallible_iterator::FallibleIterator;
use rusqlite::types::Value;
use rusqlite::{Batch, Connection, Statement, ToSql};

use crate::error::SqliteBatchError;
use crate::results::{Execution, SqlRow};
use crate::types::RowValues;

use super::params::values_as_tosql;

/// Extract one cell from an engine row.
fn extract_value(row: &rusqlite::Row, idx: usize) -> Result<RowValues, SqliteBatchError> {
    let value: Value = row.get(idx)?;
    match value {
        Value::Null => Ok(RowValues::Null),
        Value::Integer(i) => Ok(RowValues::Int(i)),
        Value::Real(f) => Ok(RowValues::Float(f)),
        Value::Text(s) => Ok(RowValues::Text(s)),
        Value::Blob(b) => Ok(RowValues::Blob(b)),
    }
}

/// Execute read-classified SQL and collect every row it produces.
///
/// The engine may prepare several embedded statements for one SQL string;
/// their result sets are flattened into a single row list in the order the
/// engine reports them. Each row keeps the column names of the result set it
/// came from, so the flattened list can be heterogeneous. `rows_modified` is
/// the connection's modified-row counter read after execution, which a pure
/// read leaves unchanged.
///
/// # Errors
///
/// Returns `SqliteBatchError::Engine` if preparation, binding, or stepping
/// fails anywhere in the string; rows collected before the failure are
/// discarded with it.
pub(crate) fn run_row_set(
    conn: &Connection,
    sql: &str,
    params: &[Value],
) -> Result<Execution, SqliteBatchError> {
    let mut rows = Vec::new();
    let mut batch = Batch::new(conn, sql);
    while let Some(mut stmt) = batch.next()? {
        collect_rows(&mut stmt, params, &mut rows)?;
    }
    Ok(Execution::RowSet {
        rows,
        rows_modified: conn.changes(),
    })
}

fn collect_rows(
    stmt: &mut Statement<'_>,
    params: &[Value],
    out: &mut Vec<SqlRow>,
) -> Result<(), SqliteBatchError> {
    let column_names: Vec<String> = stmt
        .column_names()
        .iter()
        .map(std::string::ToString::to_string)
        .collect();

    // Store column names once, shared by every row of this result set
    let column_names = Arc::new(column_names);
    let column_count = column_names.len();

    // Arguments bind positionally to each embedded statement; a mismatch is
    // the engine's error to report.
    let param_refs: Vec<&dyn ToSql> = values_as_tosql(params);
    let mut rows_iter = stmt.query(&param_refs[..])?;
    while let Some(row) = rows_iter.next()? {
        let mut values = Vec::with_capacity(column_count);
        for i in 0..column_count {
            values.push(extract_value(row, i)?);
        }
        out.push(SqlRow::new(Arc::clone(&column_names), values));
    }

    Ok(())
}

/// Execute write-classified SQL and report the engine's execution metadata.
///
/// Runs in autocommit; no transaction is opened around the statement, so a
/// caller-supplied `BEGIN`/`COMMIT` pair in the same batch behaves as
/// written. `last_insert_rowid` is whatever the connection reports, which is
/// sticky across statements.
///
/// # Errors
///
/// Returns `SqliteBatchError::Engine` for any engine-reported failure,
/// including SQL text that holds more than one statement (the mutation path
/// prepares exactly one).
pub(crate) fn run_mutation(
    conn: &Connection,
    sql: &str,
    params: &[Value],
) -> Result<Execution, SqliteBatchError> {
    let param_refs = values_as_tosql(params);
    let mut stmt = conn.prepare(sql)?;
    let rows_affected = stmt.execute(&param_refs[..])?;
    Ok(Execution::Mutation {
        last_insert_rowid: conn.last_insert_rowid(),
        rows_affected: rows_affected as u64,
    })
}
