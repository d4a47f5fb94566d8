use std::fmt;
use std::sync::Arc;

use crate::error::SqliteBatchError;
use crate::results::StatementOutcome;
use crate::sqlite::config::{SqliteOptions, SqliteOptionsBuilder};
use crate::statement::StatementRequest;
use crate::types::AccessMode;

use super::manager::SqliteWorker;

/// Handle to one embedded `SQLite` database, backed by a dedicated worker
/// thread that owns the single engine connection.
///
/// Cloning is cheap and every clone feeds the same worker, so concurrent
/// batch calls are served whole, in arrival order, never interleaved at the
/// statement level. Dropping the last clone shuts the worker down and closes
/// the connection.
#[derive(Clone)]
pub struct SqliteDatabase {
    worker: Arc<SqliteWorker>,
}

impl SqliteDatabase {
    /// Open the database described by `options` and spawn its worker thread.
    ///
    /// # Errors
    /// Returns [`SqliteBatchError::ConfigError`] if the database cannot be
    /// opened or a pragma fails, and [`SqliteBatchError::ConnectionError`] if
    /// the worker thread cannot be spawned.
    pub async fn connect(options: SqliteOptions) -> Result<Self, SqliteBatchError> {
        let (worker, ready) = SqliteWorker::spawn(options)?;
        ready
            .await
            .map_err(|_| {
                SqliteBatchError::ConnectionError(
                    "SQLite worker exited before signaling readiness".into(),
                )
            })??;
        Ok(Self {
            worker: Arc::new(worker),
        })
    }

    /// Fluent options builder; `build()` on it calls [`Self::connect`].
    #[must_use]
    pub fn builder(db_path: impl Into<String>) -> SqliteOptionsBuilder {
        SqliteOptionsBuilder::new(db_path)
    }

    /// Run an ordered batch of statements, one [`StatementOutcome`] per
    /// input statement.
    ///
    /// Statements run strictly in order on the worker-owned connection, so a
    /// later statement sees the side effects of every earlier one. A failing
    /// statement records its error in its own outcome and the batch
    /// continues; the returned vector always has the same length as
    /// `statements`. An empty batch resolves immediately with an empty
    /// vector. Nothing here opens a transaction: callers wanting atomicity
    /// include an explicit `BEGIN`/`COMMIT` pair in the batch.
    ///
    /// Under [`AccessMode::ReadOnly`], statements not classified as reads
    /// are rejected with a fixed error before reaching the engine.
    ///
    /// # Errors
    /// Returns [`SqliteBatchError::ContractViolation`] if any request has
    /// empty SQL text; nothing executes in that case. Returns
    /// [`SqliteBatchError::ConnectionError`] if the worker is gone.
    /// Per-statement failures are reported in the outcomes, never as `Err`.
    pub async fn execute_batch(
        &self,
        statements: Vec<StatementRequest>,
        mode: AccessMode,
    ) -> Result<Vec<StatementOutcome>, SqliteBatchError> {
        if statements.is_empty() {
            return Ok(Vec::new());
        }
        validate_batch(&statements)?;
        self.worker.run_batch(statements, mode).await
    }

    /// Run a single statement. Convenience over [`Self::execute_batch`].
    ///
    /// # Errors
    /// Same contract as [`Self::execute_batch`].
    pub async fn execute(
        &self,
        statement: StatementRequest,
        mode: AccessMode,
    ) -> Result<StatementOutcome, SqliteBatchError> {
        let mut outcomes = self.execute_batch(vec![statement], mode).await?;
        outcomes.pop().ok_or_else(|| {
            SqliteBatchError::ConnectionError("SQLite worker returned an empty batch result".into())
        })
    }
}

fn validate_batch(statements: &[StatementRequest]) -> Result<(), SqliteBatchError> {
    for (index, statement) in statements.iter().enumerate() {
        if statement.sql.trim().is_empty() {
            return Err(SqliteBatchError::ContractViolation(format!(
                "statement {index} has no SQL text"
            )));
        }
    }
    Ok(())
}

impl fmt::Debug for SqliteDatabase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SqliteDatabase")
            .field("handle_id", &self.worker.handle_id())
            .finish()
    }
}
