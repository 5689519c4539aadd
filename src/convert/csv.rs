use crate::errors::{AppError, AppResult};
use crate::parser::RowIterator;
use csv::Writer;
use std::path::Path;
use std::time::Instant;
use tracing::info;

/// Placeholder written for a header field absent from a record.
const MISSING_FIELD: &str = "null";

/// Converts an XML dump file into a CSV file with the given column headers.
///
/// Writes the header row first, then one data row per record in document
/// order. Fields are taken from each record in header order; a record
/// missing a header field gets the literal `null`, and record fields not
/// named in `headers` are silently dropped. The standard dialect is used
/// (comma-delimited, quoted when needed).
///
/// # Errors
///
/// Returns an error if the input cannot be opened, the XML is malformed,
/// or writing the output fails. A partially written file is left behind on
/// failure.
pub fn xml_to_csv(xml_path: &Path, csv_path: &Path, headers: &[&str]) -> AppResult<()> {
    let start = Instant::now();
    let mut writer = Writer::from_path(csv_path).map_err(|e| {
        AppError::CsvError(format!(
            "Failed to create CSV file {}: {e}",
            csv_path.display()
        ))
    })?;
    writer.write_record(headers)?;

    let mut rows_written = 0usize;
    for row in RowIterator::open(xml_path)? {
        let record = row?;
        let fields: Vec<&str> = headers
            .iter()
            .map(|header| {
                record
                    .get(*header)
                    .map(String::as_str)
                    .unwrap_or(MISSING_FIELD)
            })
            .collect();
        writer.write_record(&fields)?;
        rows_written += 1;
    }
    writer.flush()?;

    info!(
        xml_file = %xml_path.display(),
        csv_file = %csv_path.display(),
        rows = rows_written,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "CSV conversion completed"
    );

    Ok(())
}
