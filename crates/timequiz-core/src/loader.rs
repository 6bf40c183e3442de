//! Comma-separated quiz loader.
//!
//! Each row holds exactly two fields, a question and its answer. Loading is
//! all-or-nothing: the first bad row fails the whole load and no records are
//! returned. Field text is kept as written; whitespace is only folded when
//! answers are compared.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::LoadError;
use crate::model::{Record, RecordSet};

const FIELDS_PER_RECORD: usize = 2;

/// Load a quiz file from disk.
///
/// The file handle is dropped before returning, whether or not the load
/// succeeds.
pub fn load_file(path: &Path) -> Result<RecordSet, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let records = load_records(file)?;
    tracing::debug!(path = %path.display(), count = records.len(), "loaded quiz file");
    Ok(records)
}

/// Load records from any comma-separated byte stream.
///
/// An empty source yields an empty [`RecordSet`]; deciding what to do with
/// it is up to the caller.
pub fn load_records<R: Read>(source: R) -> Result<RecordSet, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(source);

    let mut records = Vec::new();
    for (index, row) in reader.records().enumerate() {
        let fallback_line = index as u64 + 1;
        let row = row.map_err(|source| LoadError::Csv {
            line: source
                .position()
                .map(|p| p.line())
                .unwrap_or(fallback_line),
            source,
        })?;

        if row.len() != FIELDS_PER_RECORD {
            return Err(LoadError::MalformedRecord {
                line: row.position().map(|p| p.line()).unwrap_or(fallback_line),
                fields: row.len(),
            });
        }

        records.push(Record::new(&row[0], &row[1]));
    }

    Ok(RecordSet::new(records))
}

/// Load records from an in-memory string (useful for testing).
pub fn load_str(content: &str) -> Result<RecordSet, LoadError> {
    load_records(content.as_bytes())
}
