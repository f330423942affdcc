use std::path::PathBuf;

use thiserror::Error;

/// Failures for a plotting run. Every variant is fatal; the driver reports
/// the first one and exits non-zero.
#[derive(Error, Debug)]
pub enum Error {
    #[error("results file '{}' could not be opened: {source}", .path.display())]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed row {row} in '{}': column {column} {reason}", .path.display())]
    MalformedRow {
        path: PathBuf,
        /// 1-based data row number, header excluded.
        row: usize,
        column: usize,
        reason: String,
    },
    #[error("failed to read records from '{}': {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("failed to render chart '{}': {reason}", .path.display())]
    Render { path: PathBuf, reason: String },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
