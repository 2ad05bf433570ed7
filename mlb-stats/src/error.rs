/// Error types for loading chart data
use thiserror::Error;

/// Main error type for MLB stats loading
#[derive(Error, Debug)]
pub enum StatsError {
    /// Failed to read or deserialize CSV data
    #[error("Failed to parse CSV: {0}")]
    CsvParse(#[from] csv::Error),

    /// A numeric field held NaN or infinity
    #[error("Invalid value in row {row}, field {field}: {value}")]
    InvalidValue {
        row: usize,
        field: &'static str,
        value: f64,
    },

    /// The input contained a header but no rows
    #[error("No {0} rows loaded")]
    Empty(&'static str),
}

/// Type alias for Results using StatsError
pub type Result<T> = std::result::Result<T, StatsError>;
