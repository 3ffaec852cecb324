//! Sink trait and error types

use crate::model::Record;
use thiserror::Error;

/// Errors that can occur while writing records
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("Failed to open {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: csv::Error,
    },

    #[error("Failed to write record: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for sink operations
pub type SinkResult<T> = Result<T, SinkError>;

/// Destination for the records of a completed run
pub trait Sink {
    /// Writes every record, replacing any previous output
    ///
    /// # Returns
    ///
    /// The number of data rows written
    fn write(&mut self, records: &[Record]) -> SinkResult<usize>;
}
