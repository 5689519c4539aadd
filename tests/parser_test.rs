//! Integration tests for the parser module

#[path = "common/mod.rs"]
mod common;

use common::*;
use sedump::errors::AppResult;
use sedump::models::Record;
use sedump::parser::RowIterator;
use tempfile::TempDir;

#[test]
fn test_row_iterator_yields_records_in_document_order() {
    let temp_dir = TempDir::new().unwrap();
    let xml_path = temp_dir.path().join("dump.xml");
    create_test_xml_file(&xml_path, SAMPLE_XML_DUMP);

    let rows: Vec<Record> = RowIterator::open(&xml_path)
        .unwrap()
        .collect::<AppResult<_>>()
        .unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].get("id").map(String::as_str), Some("1"));
    assert_eq!(rows[0].get("x").map(String::as_str), Some("a"));
    assert_eq!(rows[1].get("id").map(String::as_str), Some("2"));
    assert_eq!(rows[1].get("x").map(String::as_str), Some("b"));
}

#[test]
fn test_row_iterator_empty_dump() {
    let temp_dir = TempDir::new().unwrap();
    let xml_path = temp_dir.path().join("dump.xml");
    create_test_xml_file(&xml_path, EMPTY_XML_DUMP);

    let rows: Vec<Record> = RowIterator::open(&xml_path)
        .unwrap()
        .collect::<AppResult<_>>()
        .unwrap();
    assert!(rows.is_empty());
}

#[test]
fn test_row_iterator_missing_file_errors() {
    let temp_dir = TempDir::new().unwrap();
    let result = RowIterator::open(&temp_dir.path().join("absent.xml"));
    assert!(result.is_err());
}

#[test]
fn test_row_iterator_malformed_dump_errors() {
    let temp_dir = TempDir::new().unwrap();
    let xml_path = temp_dir.path().join("dump.xml");
    create_test_xml_file(
        &xml_path,
        r#"<?xml version="1.0"?>
<rows>
  <row id="1">
</rows>"#,
    );

    let result: AppResult<Vec<Record>> = RowIterator::open(&xml_path).unwrap().collect();
    assert!(result.is_err());
}

#[test]
fn test_row_iterator_streams_large_dump() {
    const ROWS: usize = 50_000;

    let temp_dir = TempDir::new().unwrap();
    let xml_path = temp_dir.path().join("dump.xml");
    create_large_dump(&xml_path, ROWS);

    // Consume one record at a time; nothing beyond the current element is
    // retained between pulls.
    let mut count = 0usize;
    for row in RowIterator::open(&xml_path).unwrap() {
        let record = row.unwrap();
        assert_eq!(
            record.get("Id").map(String::as_str),
            Some(count.to_string().as_str())
        );
        count += 1;
    }
    assert_eq!(count, ROWS);
}

#[test]
fn test_row_iterator_second_pass_requires_reopening() {
    let temp_dir = TempDir::new().unwrap();
    let xml_path = temp_dir.path().join("dump.xml");
    create_test_xml_file(&xml_path, SAMPLE_XML_DUMP);

    let mut rows = RowIterator::open(&xml_path).unwrap();
    assert_eq!(rows.by_ref().count(), 2);
    assert!(rows.next().is_none());

    let reopened = RowIterator::open(&xml_path).unwrap();
    assert_eq!(reopened.count(), 2);
}
