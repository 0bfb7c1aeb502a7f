use thiserror::Error;

/// Schema and content problems found while loading a dataset.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("unsupported file extension: .{0}")]
    UnsupportedExtension(String),

    #[error("missing required column '{0}'")]
    MissingColumn(String),

    /// Neither `datetime`/`timestamp` nor `year`+`month`+`day` is present.
    #[error("no time column: expected 'datetime', 'timestamp' or 'year'/'month'/'day'")]
    MissingTimeColumn,

    #[error("row {row}: cannot parse timestamp '{value}'")]
    BadTimestamp { row: usize, value: String },

    #[error("row {row}: missing value in column '{column}'")]
    MissingValue { row: usize, column: String },

    #[error("dataset contains no rows")]
    Empty,
}
