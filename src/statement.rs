use crate::types::RowValues;

/// One batch entry: a SQL string and its bound arguments.
///
/// Requests are immutable once submitted and consumed by a single batch call:
/// ```rust
/// use sqlite_batch::prelude::*;
///
/// let request = StatementRequest::new(
///     "INSERT INTO t (id, name) VALUES (?1, ?2)",
///     vec![RowValues::Int(1), RowValues::Text("alice".into())],
/// );
/// # let _ = request;
/// ```
#[derive(Debug, Clone)]
pub struct StatementRequest {
    /// The SQL statement text
    pub sql: String,
    /// The arguments to bind to the statement
    pub args: Vec<RowValues>,
}

impl StatementRequest {
    /// Create a new `StatementRequest` with the given SQL text and arguments.
    pub fn new(sql: impl Into<String>, args: Vec<RowValues>) -> Self {
        Self {
            sql: sql.into(),
            args,
        }
    }

    /// Create a new `StatementRequest` with no arguments.
    pub fn without_args(sql: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            args: Vec::new(),
        }
    }
}
