//! CSV sink
//!
//! One file per run with a header row. An existing file is truncated.

use crate::model::Record;
use crate::output::traits::{Sink, SinkError, SinkResult};
use std::path::{Path, PathBuf};

/// Writes records as CSV to a fixed path
#[derive(Debug, Clone)]
pub struct CsvSink {
    path: PathBuf,
}

impl CsvSink {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl Sink for CsvSink {
    fn write(&mut self, records: &[Record]) -> SinkResult<usize> {
        // Header is written explicitly so an empty run still produces one
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&self.path)
            .map_err(|source| SinkError::Open {
                path: self.path.display().to_string(),
                source,
            })?;

        writer.write_record(Record::COLUMNS)?;
        for record in records {
            writer.serialize(record)?;
        }
        writer.flush()?;

        tracing::debug!("Wrote {} rows to {}", records.len(), self.path.display());
        Ok(records.len())
    }
}
