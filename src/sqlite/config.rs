use std::fmt::Write;

use rusqlite::Connection;
use serde::{Deserialize, Serialize};

use crate::error::SqliteBatchError;
use crate::sqlite::SqliteDatabase;

const IN_MEMORY_PATH: &str = ":memory:";

/// Options for opening the embedded `SQLite` database.
///
/// Connection bootstrap (file path vs in-memory, pragmas) happens once, when
/// the worker thread starts; none of it is revisited per batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SqliteOptions {
    /// Database file path, or `:memory:` for a private in-memory database.
    pub db_path: String,
    /// Journal mode pragma applied at open, e.g. `WAL`.
    pub journal_mode: Option<String>,
    /// Busy timeout pragma in milliseconds.
    pub busy_timeout_ms: Option<u32>,
    /// Whether to turn on foreign key enforcement at open.
    pub foreign_keys: bool,
}

impl SqliteOptions {
    #[must_use]
    pub fn new(db_path: impl Into<String>) -> Self {
        Self {
            db_path: db_path.into(),
            journal_mode: Some("WAL".to_string()),
            busy_timeout_ms: None,
            foreign_keys: false,
        }
    }

    /// Options for a private in-memory database.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(IN_MEMORY_PATH)
    }
}

/// Fluent builder for `SQLite` options.
#[derive(Debug, Clone)]
pub struct SqliteOptionsBuilder {
    opts: SqliteOptions,
}

impl SqliteOptionsBuilder {
    #[must_use]
    pub fn new(db_path: impl Into<String>) -> Self {
        Self {
            opts: SqliteOptions::new(db_path),
        }
    }

    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            opts: SqliteOptions::in_memory(),
        }
    }

    #[must_use]
    pub fn journal_mode(mut self, mode: impl Into<String>) -> Self {
        self.opts.journal_mode = Some(mode.into());
        self
    }

    #[must_use]
    pub fn busy_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.opts.busy_timeout_ms = Some(timeout_ms);
        self
    }

    #[must_use]
    pub fn foreign_keys(mut self, enabled: bool) -> Self {
        self.opts.foreign_keys = enabled;
        self
    }

    #[must_use]
    pub fn finish(self) -> SqliteOptions {
        self.opts
    }

    /// Open the database and spawn its worker thread.
    ///
    /// # Errors
    ///
    /// Returns `SqliteBatchError` if the database cannot be opened or the
    /// worker thread cannot be spawned.
    pub async fn build(self) -> Result<SqliteDatabase, SqliteBatchError> {
        SqliteDatabase::connect(self.finish()).await
    }
}

/// Open the engine connection described by `opts` and apply its pragmas.
///
/// Runs on the worker thread at spawn. Pragmas go through the engine's own
/// batch entry point, which steps statements and discards any rows they
/// return (`journal_mode` reports one).
pub(crate) fn open_connection(opts: &SqliteOptions) -> Result<Connection, SqliteBatchError> {
    let conn = Connection::open(&opts.db_path).map_err(|e| {
        SqliteBatchError::ConfigError(format!(
            "failed to open SQLite database at {}: {e}",
            opts.db_path
        ))
    })?;

    let pragmas = pragma_batch(opts);
    if !pragmas.is_empty() {
        conn.execute_batch(&pragmas)
            .map_err(|e| SqliteBatchError::ConfigError(format!("failed to apply pragmas: {e}")))?;
    }

    Ok(conn)
}

fn pragma_batch(opts: &SqliteOptions) -> String {
    let mut pragmas = String::new();
    if let Some(mode) = &opts.journal_mode {
        let _ = writeln!(pragmas, "PRAGMA journal_mode = {mode};");
    }
    if let Some(timeout_ms) = opts.busy_timeout_ms {
        let _ = writeln!(pragmas, "PRAGMA busy_timeout = {timeout_ms};");
    }
    if opts.foreign_keys {
        pragmas.push_str("PRAGMA foreign_keys = ON;\n");
    }
    pragmas
}

#[cfg(test)]
mod tests {
    use super::{SqliteOptions, SqliteOptionsBuilder, pragma_batch};

    #[test]
    fn builder_overrides_defaults() {
        let opts = SqliteOptionsBuilder::new("app.db")
            .journal_mode("MEMORY")
            .busy_timeout_ms(5000)
            .foreign_keys(true)
            .finish();
        assert_eq!(opts.db_path, "app.db");
        assert_eq!(opts.journal_mode.as_deref(), Some("MEMORY"));
        assert_eq!(opts.busy_timeout_ms, Some(5000));
        assert!(opts.foreign_keys);
    }

    #[test]
    fn pragma_batch_reflects_options() {
        let opts = SqliteOptionsBuilder::in_memory()
            .busy_timeout_ms(250)
            .finish();
        let pragmas = pragma_batch(&opts);
        assert!(pragmas.contains("PRAGMA journal_mode = WAL;"));
        assert!(pragmas.contains("PRAGMA busy_timeout = 250;"));
        assert!(!pragmas.contains("foreign_keys"));
    }

    #[test]
    fn options_deserialize_from_config_json() {
        let opts: SqliteOptions = serde_json::from_str(
            r#"{"db_path": "data/app.db", "journal_mode": "WAL", "busy_timeout_ms": null, "foreign_keys": false}"#,
        )
        .expect("valid options JSON");
        assert_eq!(opts.db_path, "data/app.db");
        assert_eq!(opts.busy_timeout_ms, None);
    }
}
