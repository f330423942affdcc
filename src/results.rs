use std::fs::File;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use log::debug;

use crate::error::{Error, Result};

// Column layout written by the benchmark harness:
// Files (#), Audio (s), Fingerprints (#), Query speed (s/s), Store speed (s/s)
// The file count and fingerprint count are not plotted.
const INDEX_SIZE_COLUMN: usize = 1;
const QUERY_SPEED_COLUMN: usize = 3;
const STORE_SPEED_COLUMN: usize = 4;
const MIN_COLUMNS: usize = 5;

/// Parallel series extracted from one benchmark results file, one element per
/// data row, in file order. The three vectors are always the same length.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SpeedSeries {
    pub index_sizes: Vec<f64>,
    pub query_speeds: Vec<f64>,
    pub store_speeds: Vec<f64>,
}

impl SpeedSeries {
    /// Reads a results CSV. The header row is discarded without validation;
    /// every data row must carry at least five fields, with the index size,
    /// query speed, and store speed fields numeric. Trailing extra fields
    /// are ignored.
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|source| Error::FileNotFound {
            path: path.to_path_buf(),
            source,
        })?;

        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(file);

        let mut series = SpeedSeries::default();

        for (index, record) in reader.records().enumerate() {
            let record = record.map_err(|source| Error::Csv {
                path: path.to_path_buf(),
                source,
            })?;
            let row = index + 1;

            if record.len() < MIN_COLUMNS {
                return Err(Error::MalformedRow {
                    path: path.to_path_buf(),
                    row,
                    column: record.len(),
                    reason: format!(
                        "is missing ({} of {} required fields present)",
                        record.len(),
                        MIN_COLUMNS
                    ),
                });
            }

            series
                .index_sizes
                .push(numeric_field(&record, path, row, INDEX_SIZE_COLUMN)?);
            series
                .query_speeds
                .push(numeric_field(&record, path, row, QUERY_SPEED_COLUMN)?);
            series
                .store_speeds
                .push(numeric_field(&record, path, row, STORE_SPEED_COLUMN)?);
        }

        debug!("{}: {} data rows", path.display(), series.len());

        Ok(series)
    }

    pub fn len(&self) -> usize {
        self.index_sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index_sizes.is_empty()
    }
}

fn numeric_field(record: &StringRecord, path: &Path, row: usize, column: usize) -> Result<f64> {
    let raw = record.get(column).unwrap_or("");

    raw.trim().parse().map_err(|_| Error::MalformedRow {
        path: path.to_path_buf(),
        row,
        column,
        reason: format!("holds '{}', which is not numeric", raw.trim()),
    })
}
