use thiserror::Error;

/// Errors raised while loading and enriching a post table.
#[derive(Debug, Error)]
pub enum LoadError {
    /// One or more required columns are absent from the source.
    #[error("missing required column(s): {}", .missing.join(", "))]
    Schema { missing: Vec<String> },

    /// A value could not be parsed. `row` is the 0-based data row.
    #[error("row {row}, column '{column}': {reason}")]
    DataFormat {
        row: usize,
        column: String,
        reason: String,
    },

    #[error("unsupported file extension: .{0}")]
    UnsupportedFormat(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Parquet error: {0}")]
    Parquet(#[from] parquet::errors::ParquetError),

    #[error("Arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),
}

impl LoadError {
    pub fn data_format(row: usize, column: &str, reason: impl Into<String>) -> Self {
        LoadError::DataFormat {
            row,
            column: column.to_string(),
            reason: reason.into(),
        }
    }

    pub fn schema(missing: Vec<String>) -> Self {
        LoadError::Schema { missing }
    }
}

/// Errors raised by the query engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QueryError {
    /// Maximum requested over a view with no rows.
    #[error("no rows in the selected period")]
    EmptyView,
}
