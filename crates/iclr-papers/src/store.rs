//! JSON and CSV persistence for paper records.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::{StoreError, StoreResult};
use crate::models::{CSV_HEADER, PaperRecord, PaperRow};

/// Records read from a CSV file.
#[derive(Debug, Clone, Default)]
pub struct CsvLoad {
    /// Rows that decoded cleanly, in file order.
    pub records: Vec<PaperRecord>,

    /// Rows dropped because they could not be decoded.
    pub skipped: usize,
}

/// Write records as a pretty-printed JSON array.
///
/// # Errors
///
/// Returns error if the file cannot be created or written.
pub fn write_json(path: &Path, records: &[PaperRecord]) -> StoreResult<()> {
    let file = File::create(path).map_err(|e| StoreError::io(path, e))?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, records).map_err(|e| StoreError::json(path, e))?;
    writer.write_all(b"\n").map_err(|e| StoreError::io(path, e))?;
    writer.flush().map_err(|e| StoreError::io(path, e))?;

    tracing::debug!(path = %path.display(), records = records.len(), "Wrote JSON");
    Ok(())
}

/// Read a JSON array of records.
///
/// # Errors
///
/// Returns error if the file cannot be opened or is not a record array.
pub fn read_json(path: &Path) -> StoreResult<Vec<PaperRecord>> {
    let file = File::open(path).map_err(|e| StoreError::io(path, e))?;
    serde_json::from_reader(BufReader::new(file)).map_err(|e| StoreError::json(path, e))
}

/// Write records as CSV with a header row. Keywords are flattened into one cell.
///
/// # Errors
///
/// Returns error if the file cannot be created or written.
pub fn write_csv(path: &Path, records: &[PaperRecord]) -> StoreResult<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(|e| StoreError::csv(path, e))?;

    writer.write_record(CSV_HEADER).map_err(|e| StoreError::csv(path, e))?;
    for record in records {
        writer.serialize(PaperRow::from(record)).map_err(|e| StoreError::csv(path, e))?;
    }
    writer.flush().map_err(|e| StoreError::io(path, e))?;

    tracing::debug!(path = %path.display(), records = records.len(), "Wrote CSV");
    Ok(())
}

/// Read records from CSV, skipping rows that fail to decode.
///
/// # Errors
///
/// Returns error if the file cannot be opened or read. Malformed rows are not errors.
pub fn read_csv(path: &Path) -> StoreResult<CsvLoad> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(|e| StoreError::csv(path, e))?;

    let mut load = CsvLoad::default();
    for (line, row) in reader.deserialize::<PaperRow>().enumerate() {
        match row {
            Ok(row) => load.records.push(PaperRecord::from(row)),
            Err(e) if e.is_io_error() => return Err(StoreError::csv(path, e)),
            Err(e) => {
                load.skipped += 1;
                // +2: one for the header, one for 1-based numbering
                tracing::warn!(row = line + 2, error = %e, "Skipping malformed CSV row");
            }
        }
    }

    tracing::debug!(
        path = %path.display(),
        records = load.records.len(),
        skipped = load.skipped,
        "Read CSV"
    );
    Ok(load)
}
