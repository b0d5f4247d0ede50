//! Row source
//!
//! Reads headerless CSV files (comma separated, double-quote quoting) into
//! raw rows. Rows are not validated here: a record with the wrong number of
//! fields is passed through and fails in the parser like any other bad row.
//!
//! Each row keeps the file line its record starts on. Blank lines carry no
//! record and are skipped, so row numbers can have gaps.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// One input record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    /// 1-based line of the file the record starts on
    pub line: usize,
    /// Fields in file order
    pub fields: Vec<String>,
}

/// Extension of input files picked up from the work directory
const INPUT_EXTENSION: &str = "csv";

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Failed to open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read {} at record {record}: {source}", .path.display())]
    Read {
        path: PathBuf,
        record: usize,
        source: csv::Error,
    },
}

/// Reads every record of a CSV file
///
/// A record that cannot be decoded (e.g. invalid UTF-8) fails the whole
/// file.
pub fn read_rows(path: &Path) -> Result<Vec<RawRow>, SourceError> {
    let data = std::fs::read(path).map_err(|source| SourceError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(b',')
        .quote(b'"')
        .trim(csv::Trim::All)
        .from_reader(data.as_slice());

    let mut rows = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        let record = result.map_err(|source| SourceError::Read {
            path: path.to_path_buf(),
            record: idx + 1,
            source,
        })?;
        let line = record
            .position()
            .map_or(idx + 1, |position| start_line(&data, position));
        rows.push(RawRow {
            line,
            fields: record.iter().map(str::to_string).collect(),
        });
    }

    Ok(rows)
}

/// Line a record starts on
///
/// The reader stamps a record with the position where it started looking
/// for it, which is before any blank lines it skipped.
fn start_line(data: &[u8], position: &csv::Position) -> usize {
    let offset = usize::try_from(position.byte()).unwrap_or(data.len());
    let skipped = data
        .get(offset..)
        .unwrap_or_default()
        .iter()
        .take_while(|&&b| b == b'\r' || b == b'\n')
        .filter(|&&b| b == b'\n')
        .count();
    position.line() as usize + skipped
}

/// Lists the `*.csv` files directly inside `dir`, sorted by name
pub fn list_input_files(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        let is_input = path.is_file()
            && path
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case(INPUT_EXTENSION));
        if is_input {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
