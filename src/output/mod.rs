//! Output module for harvest results
//!
//! This module handles:
//! - Writing records to the CSV sink
//! - Reporting traversal progress
//! - Printing the end-of-run summary

mod csv_sink;
mod progress;
pub mod stats;
mod traits;

pub use csv_sink::CsvSink;
pub use progress::{LogProgress, NullProgress, Progress};
pub use stats::print_summary;
pub use traits::{Sink, SinkError, SinkResult};
