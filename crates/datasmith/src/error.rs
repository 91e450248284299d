//! Error types for the datasmith library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for datasmith operations.
#[derive(Debug, Error)]
pub enum DatasmithError {
    /// Error reading or writing an output file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Error flushing serialized output.
    #[error("write error: {0}")]
    Write(#[from] std::io::Error),

    /// Lookup for an entity the parameter table does not cover. Fatal:
    /// the tables are static and exhaustive by construction, so there is
    /// no recovery.
    #[error("no baseline for '{city}' in month {month}")]
    MissingBaseline { city: String, month: u32 },

    /// Baseline rejected at table load time.
    #[error("invalid baseline for '{city}': {message}")]
    InvalidBaseline { city: String, message: String },

    /// Region weights that cannot form a probability distribution.
    #[error("invalid region weights: {0}")]
    InvalidWeights(String),

    /// Parameter table with no entries.
    #[error("empty table: {0}")]
    EmptyTable(String),
}

/// Result type alias for datasmith operations.
pub type Result<T> = std::result::Result<T, DatasmithError>;
