/// Error types for building a narrative chart
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NarrativeError {
    /// Loading the underlying data failed
    #[error(transparent)]
    Stats(#[from] mlb_stats::StatsError),

    /// The chart variant needs data that was not loaded
    #[error("Chart variant needs {0} data but none was loaded")]
    MissingData(&'static str),

    /// Failed to parse a JSON chart config
    #[error("Invalid chart config: {0}")]
    Config(#[from] serde_json::Error),
}
