//! Writing record collections back out as CSV.

use std::io::Write;
use std::path::Path;

use medrec_model::Record;
use tracing::debug;

use crate::error::{IngestError, Result};

/// Writes `records` with their kind's export header to any writer.
///
/// Fields containing commas are quoted, so the output parses back to the same
/// cells. Embedded double quotes do not survive a round trip.
pub fn write_records_to<W: Write, R: Record>(writer: W, records: &[R]) -> csv::Result<()> {
    let mut out = csv::Writer::from_writer(writer);
    out.write_record(R::KIND.export_columns())?;
    for record in records {
        out.write_record(record.to_row())?;
    }
    out.flush()?;
    Ok(())
}

/// Writes `records` to a file at `path`, returning the number of data rows.
pub fn write_records<R: Record>(path: &Path, records: &[R]) -> Result<usize> {
    let file = std::fs::File::create(path).map_err(|e| IngestError::Write {
        path: path.to_path_buf(),
        source: e.into(),
    })?;
    write_records_to(file, records).map_err(|e| IngestError::Write {
        path: path.to_path_buf(),
        source: e,
    })?;
    debug!(
        path = %path.display(),
        kind = %R::KIND,
        rows = records.len(),
        "exported records"
    );
    Ok(records.len())
}
