use super::stream::StreamArray;
use crate::errors::{AppError, AppResult};
use crate::parser::RowIterator;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Instant;
use tracing::info;

/// Converts an XML dump file into a pretty-printed JSON array file.
///
/// The output is a single tab-indented array with one object per record,
/// in document order. Records are streamed: each row is parsed, serialized
/// and written before the next one is read, so neither the input document
/// nor the output text is ever held in memory as a whole.
///
/// # Errors
///
/// Returns an error if the input cannot be opened, the XML is malformed,
/// or writing the output fails. No cleanup is performed on failure; a
/// partially written output file is left behind.
pub fn xml_to_json(xml_path: &Path, json_path: &Path) -> AppResult<()> {
    let start = Instant::now();
    let rows = RowIterator::open(xml_path)?;

    let file = File::create(json_path).map_err(|e| {
        AppError::IoError(format!(
            "Failed to create JSON file {}: {e}",
            json_path.display()
        ))
    })?;
    let mut writer = BufWriter::new(file);

    let formatter = PrettyFormatter::with_indent(b"\t");
    let mut serializer = serde_json::Serializer::with_formatter(&mut writer, formatter);
    StreamArray::new(rows).serialize(&mut serializer)?;
    writer.flush()?;

    info!(
        xml_file = %xml_path.display(),
        json_file = %json_path.display(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "JSON conversion completed"
    );

    Ok(())
}
