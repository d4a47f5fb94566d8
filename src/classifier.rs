//! Textual read/write classification.
//!
//! A statement is a read iff, after leading whitespace, it starts with the
//! case-insensitive keyword `SELECT` followed by a word boundary. This is a
//! prefix check, not a parse: a CTE (`WITH ... SELECT`), a `SELECT` behind a
//! leading comment, or several statements packed into one string are all
//! classified by the prefix alone. The read-only gate inherits these limits.

use std::sync::LazyLock;

use regex::Regex;

static SELECT_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\s*SELECT\b").expect("SELECT prefix pattern compiles"));

/// Classification of one statement's SQL text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatementKind {
    /// Dispatched on the row-set path.
    Read,
    /// Dispatched on the mutation path; rejected in read-only mode.
    Write,
}

/// Classify one statement by its leading keyword.
#[must_use]
pub fn classify(sql: &str) -> StatementKind {
    if SELECT_PREFIX.is_match(sql) {
        StatementKind::Read
    } else {
        StatementKind::Write
    }
}
