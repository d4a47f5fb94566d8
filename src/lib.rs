//! Async batch execution for embedded `SQLite`.
//!
//! One [`SqliteDatabase`] owns one engine connection on a dedicated worker
//! thread. Callers submit an ordered batch of [`StatementRequest`]s under an
//! [`AccessMode`]; each statement is classified as a read or a write by a
//! textual heuristic, optionally rejected by the read-only gate, executed,
//! and normalized into one [`StatementOutcome`] per input statement. A
//! statement's failure lands in its own outcome and never aborts the rest of
//! the batch.
//!
//! ```no_run
//! use sqlite_batch::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), SqliteBatchError> {
//!     let db = SqliteDatabase::builder("app.db").build().await?;
//!     let outcomes = db
//!         .execute_batch(
//!             vec![
//!                 StatementRequest::without_args(
//!                     "CREATE TABLE t (id INTEGER PRIMARY KEY, x INTEGER)",
//!                 ),
//!                 StatementRequest::new(
//!                     "INSERT INTO t (x) VALUES (?1)",
//!                     vec![RowValues::Int(5)],
//!                 ),
//!                 StatementRequest::without_args("SELECT x FROM t"),
//!             ],
//!             AccessMode::ReadWrite,
//!         )
//!         .await?;
//!     assert_eq!(outcomes.len(), 3);
//!     assert_eq!(outcomes[2].rows()[0].get("x"), Some(&RowValues::Int(5)));
//!     Ok(())
//! }
//! ```

pub mod classifier;
mod error;
pub mod prelude;
mod results;
mod sqlite;
mod statement;
mod types;

pub use classifier::{StatementKind, classify};
pub use error::SqliteBatchError;
pub use results::{SqlRow, StatementOutcome};
pub use sqlite::{SqliteDatabase, SqliteOptions, SqliteOptionsBuilder};
pub use statement::StatementRequest;
pub use types::{AccessMode, RowValues};
