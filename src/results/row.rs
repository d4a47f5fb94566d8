use crate::types::RowValues;

/// One row of a statement outcome.
///
/// Column names are shared across every row that came from the same embedded
/// result set, and values keep the engine's column order.
#[derive(Debug, Clone)]
pub struct SqlRow {
    /// The column names for this row (shared across rows of one result set)
    pub column_names: std::sync::Arc<Vec<String>>,
    /// The values for this row, in column order
    pub values: Vec<RowValues>,
    // Internal cache for faster column lookups (to avoid repeated string comparisons)
    #[doc(hidden)]
    pub(crate) column_index_cache: std::sync::Arc<std::collections::HashMap<String, usize>>,
}

impl SqlRow {
    /// Create a new row from shared column names and its values.
    #[must_use]
    pub fn new(column_names: std::sync::Arc<Vec<String>>, values: Vec<RowValues>) -> Self {
        // Build a cache of column name to index for faster lookups
        let cache = std::sync::Arc::new(
            column_names
                .iter()
                .enumerate()
                .map(|(i, name)| (name.clone(), i))
                .collect::<std::collections::HashMap<_, _>>(),
        );

        Self {
            column_names,
            values,
            column_index_cache: cache,
        }
    }

    /// Get the index of a column by name, or None if not found.
    #[must_use]
    pub fn column_index(&self, column_name: &str) -> Option<usize> {
        // First check the cache
        if let Some(&idx) = self.column_index_cache.get(column_name) {
            return Some(idx);
        }

        // Fall back to linear search
        self.column_names.iter().position(|col| col == column_name)
    }

    /// Get a value by column name, or None if the column doesn't exist.
    #[must_use]
    pub fn get(&self, column_name: &str) -> Option<&RowValues> {
        let index_opt = self.column_index(column_name);
        if let Some(idx) = index_opt {
            self.values.get(idx)
        } else {
            None
        }
    }

    /// Get a value by column index, or None if out of bounds.
    #[must_use]
    pub fn get_by_index(&self, index: usize) -> Option<&RowValues> {
        self.values.get(index)
    }
}
