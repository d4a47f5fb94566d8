use chrono::NaiveDateTime;
use clap::ValueEnum;
use serde_json::Value as JsonValue;

/// Values that can be bound to a statement or read back from a result row.
///
/// Bound arguments and result cells share the same enum, so a value inserted
/// through one batch compares equal to the value selected back in the next:
/// ```rust
/// use sqlite_batch::prelude::*;
///
/// let args = vec![
///     RowValues::Int(1),
///     RowValues::Text("alice".into()),
///     RowValues::Bool(true),
/// ];
/// # let _ = args;
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum RowValues {
    /// Integer value (64-bit)
    Int(i64),
    /// Floating point value (64-bit)
    Float(f64),
    /// Text/string value
    Text(String),
    /// Boolean value
    Bool(bool),
    /// Timestamp value
    Timestamp(NaiveDateTime),
    /// NULL value
    Null,
    /// JSON value
    JSON(JsonValue),
    /// Binary data
    Blob(Vec<u8>),
}

impl RowValues {
    /// Check if this value is NULL
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[must_use]
    pub fn as_int(&self) -> Option<&i64> {
        if let RowValues::Int(value) = self {
            Some(value)
        } else {
            None
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        if let RowValues::Text(value) = self {
            Some(value)
        } else {
            None
        }
    }

    /// Booleans round-trip through the engine as integers, so `Int(1)` and
    /// `Int(0)` also answer here.
    #[must_use]
    pub fn as_bool(&self) -> Option<&bool> {
        if let RowValues::Bool(value) = self {
            return Some(value);
        } else if let Some(i) = self.as_int() {
            if *i == 1 {
                return Some(&true);
            } else if *i == 0 {
                return Some(&false);
            }
        }
        None
    }

    #[must_use]
    pub fn as_timestamp(&self) -> Option<NaiveDateTime> {
        if let RowValues::Timestamp(value) = self {
            return Some(*value);
        } else if let Some(s) = self.as_text() {
            // Try "YYYY-MM-DD HH:MM:SS"
            if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
                return Some(dt);
            }
            // Try "YYYY-MM-DD HH:MM:SS.SSS"
            if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S.%3f") {
                return Some(dt);
            }
        }
        None
    }

    #[must_use]
    pub fn as_float(&self) -> Option<f64> {
        if let RowValues::Float(value) = self {
            Some(*value)
        } else {
            None
        }
    }

    #[must_use]
    pub fn as_blob(&self) -> Option<&[u8]> {
        if let RowValues::Blob(bytes) = self {
            Some(bytes)
        } else {
            None
        }
    }
}

/// Execution mode for one batch call. The mode scopes the entire batch, not
/// individual statements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum AccessMode {
    /// Reject every statement not classified as a read before it reaches the
    /// engine.
    ReadOnly,
    /// Allow reads and writes.
    ReadWrite,
}

impl AccessMode {
    #[must_use]
    pub fn is_read_only(self) -> bool {
        matches!(self, Self::ReadOnly)
    }
}
