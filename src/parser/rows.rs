use crate::errors::{AppError, AppResult};
use crate::models::Record;
use quick_xml::events::{BytesStart, Event};
use quick_xml::name::QName;
use quick_xml::reader::Reader;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Lazy, forward-only iterator over the repeated record element of an XML
/// dump file.
///
/// A dump document is a single root wrapping N sibling elements of one tag,
/// each carrying its data as attributes:
///
/// ```text
/// <posts>
///   <row Id="1" Score="42"/>
///   <row Id="2" Score="7"/>
/// </posts>
/// ```
///
/// The iterator yields one [`Record`] per sibling in document order. The
/// first element after the root fixes the tracked record tag for the whole
/// document; a later top-level sibling with a different tag is rejected as
/// a parse error. Nested children of a record are skipped structurally, so
/// peak memory is bounded by one element's subtree regardless of document
/// size.
///
/// The stream is one-pass: re-iterating requires reopening the file.
/// Malformed XML surfaces as an `Err` item and ends the stream; callers
/// perform no recovery.
pub struct RowIterator<R: BufRead> {
    reader: Reader<R>,
    buf: Vec<u8>,
    skip_buf: Vec<u8>,
    root_seen: bool,
    record_tag: Option<String>,
    finished: bool,
}

impl RowIterator<BufReader<File>> {
    /// Opens an XML dump file for streaming.
    pub fn open(path: &Path) -> AppResult<Self> {
        let file = File::open(path).map_err(|e| {
            AppError::IoError(format!("Failed to open XML file {}: {e}", path.display()))
        })?;
        Ok(Self::from_reader(BufReader::new(file)))
    }
}

impl<R: BufRead> RowIterator<R> {
    /// Wraps an already-open reader. Mainly useful for tests and in-memory
    /// sources.
    pub fn from_reader(source: R) -> Self {
        let mut reader = Reader::from_reader(source);
        reader.config_mut().trim_text(true);
        Self {
            reader,
            buf: Vec::with_capacity(8192),
            skip_buf: Vec::new(),
            root_seen: false,
            record_tag: None,
            finished: false,
        }
    }

    fn advance(&mut self) -> AppResult<Option<Record>> {
        loop {
            self.buf.clear();
            match self.reader.read_event_into(&mut self.buf)? {
                Event::Start(element) => {
                    if !self.root_seen {
                        self.root_seen = true;
                        continue;
                    }

                    let name = String::from_utf8_lossy(element.name().as_ref()).into_owned();
                    check_record_tag(&mut self.record_tag, &name)?;
                    let record = collect_attributes(&element)?;

                    // The record's own attributes are the payload; any child
                    // subtree is consumed without being materialized.
                    self.skip_buf.clear();
                    self.reader
                        .read_to_end_into(QName(name.as_bytes()), &mut self.skip_buf)?;
                    return Ok(Some(record));
                }
                Event::Empty(element) => {
                    if !self.root_seen {
                        // Self-closed root wraps no records.
                        return Ok(None);
                    }

                    let name = String::from_utf8_lossy(element.name().as_ref()).into_owned();
                    check_record_tag(&mut self.record_tag, &name)?;
                    return Ok(Some(collect_attributes(&element)?));
                }
                Event::Eof => return Ok(None),
                _ => {}
            }
        }
    }
}

/// Fixes the tracked record tag on first sight and rejects any later
/// top-level sibling that does not match it.
fn check_record_tag(record_tag: &mut Option<String>, name: &str) -> AppResult<()> {
    match record_tag {
        None => {
            *record_tag = Some(name.to_owned());
            Ok(())
        }
        Some(tag) if tag.as_str() != name => Err(AppError::ParseError(format!(
            "Mixed top-level element types: expected <{tag}>, found <{name}>"
        ))),
        Some(_) => Ok(()),
    }
}

fn collect_attributes(element: &BytesStart<'_>) -> AppResult<Record> {
    let mut record = Record::new();
    for attr in element.attributes() {
        let attr =
            attr.map_err(|e| AppError::ParseError(format!("Malformed attribute: {e}")))?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr
            .unescape_value()
            .map_err(|e| AppError::ParseError(format!("Failed to unescape attribute: {e}")))?
            .into_owned();
        record.insert(key, value);
    }
    Ok(record)
}

impl<R: BufRead> Iterator for RowIterator<R> {
    type Item = AppResult<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.advance() {
            Ok(Some(record)) => Some(Ok(record)),
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(err) => {
                self.finished = true;
                Some(Err(err))
            }
        }
    }
}
