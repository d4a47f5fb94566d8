//! Convenient imports for common functionality.
//!
//! This module re-exports the most commonly used types and functions
//! to make it easier to get started with the library.

pub use crate::classifier::{StatementKind, classify};
pub use crate::error::SqliteBatchError;
pub use crate::results::{SqlRow, StatementOutcome};
pub use crate::sqlite::{SqliteDatabase, SqliteOptions, SqliteOptionsBuilder};
pub use crate::statement::StatementRequest;
pub use crate::types::{AccessMode, RowValues};
