use crate::models::Record;
use quick_xml::events::Event;
use quick_xml::reader::Reader;
use tracing::warn;

/// Parses one XML element given as a standalone string and returns its
/// attribute map.
///
/// This is the isolated-fragment counterpart to [`RowIterator`]: callers
/// that already hold a single row as raw XML text (a log line, a message
/// payload) get the same flat mapping without opening a file. A syntax
/// error never propagates: the offending fragment is logged and whatever
/// was extracted up to that point is returned, possibly empty.
///
/// [`RowIterator`]: super::RowIterator
pub fn attributes_to_map(fragment: &str) -> Record {
    let mut reader = Reader::from_str(fragment);
    let mut record = Record::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(element)) | Ok(Event::Empty(element)) => {
                for attr in element.attributes() {
                    let attr = match attr {
                        Ok(attr) => attr,
                        Err(err) => {
                            warn!(fragment, error = %err, "Malformed attribute in XML fragment");
                            return record;
                        }
                    };
                    let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
                    match attr.unescape_value() {
                        Ok(value) => {
                            record.insert(key, value.into_owned());
                        }
                        Err(err) => {
                            warn!(fragment, error = %err, "Failed to unescape attribute value");
                            return record;
                        }
                    }
                }
                // Only the root element's attributes matter; children are
                // not assumed and not inspected.
                return record;
            }
            Ok(Event::Eof) => return record,
            Ok(_) => {}
            Err(err) => {
                warn!(fragment, error = %err, "Failed to parse XML fragment");
                return record;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::attributes_to_map;

    #[test]
    fn extracts_all_attributes_of_a_self_closed_element() {
        let record = attributes_to_map(r#"<row Id="7" PostTypeId="1" Score="42"/>"#);
        assert_eq!(record.len(), 3);
        assert_eq!(record.get("Id").map(String::as_str), Some("7"));
        assert_eq!(record.get("PostTypeId").map(String::as_str), Some("1"));
        assert_eq!(record.get("Score").map(String::as_str), Some("42"));
    }

    #[test]
    fn extracts_attributes_of_an_open_element() {
        let record = attributes_to_map(r#"<row Id="1">ignored</row>"#);
        assert_eq!(record.get("Id").map(String::as_str), Some("1"));
    }

    #[test]
    fn unescapes_entities_in_values() {
        let record = attributes_to_map(r#"<row Body="&lt;p&gt;hi&lt;/p&gt;"/>"#);
        assert_eq!(record.get("Body").map(String::as_str), Some("<p>hi</p>"));
    }

    #[test]
    fn element_without_attributes_yields_empty_map() {
        assert!(attributes_to_map("<row/>").is_empty());
    }

    #[test]
    fn malformed_fragment_yields_empty_map() {
        assert!(attributes_to_map("<row Id=").is_empty());
        assert!(attributes_to_map("not xml at all").is_empty());
    }
}
