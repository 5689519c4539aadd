//! Common test utilities for integration tests

use std::fs;
use std::io::Write;
use std::path::Path;

/// Helper function to create a test XML file in a directory
#[allow(dead_code)]
pub fn create_test_xml_file(path: &Path, content: &str) {
    let parent = path.parent().unwrap();
    fs::create_dir_all(parent).unwrap();
    fs::File::create(path)
        .unwrap()
        .write_all(content.as_bytes())
        .unwrap();
}

/// Helper function to generate a dump with `count` sequential rows
#[allow(dead_code)]
pub fn create_large_dump(path: &Path, count: usize) {
    let parent = path.parent().unwrap();
    fs::create_dir_all(parent).unwrap();
    let mut file = fs::File::create(path).unwrap();
    file.write_all(b"<?xml version=\"1.0\"?>\n<posts>\n").unwrap();
    for i in 0..count {
        writeln!(file, r#"  <row Id="{i}" Score="{}"/>"#, i % 100).unwrap();
    }
    file.write_all(b"</posts>\n").unwrap();
}

/// Sample dump content for testing
#[allow(dead_code)]
pub const SAMPLE_XML_DUMP: &str = r#"<?xml version="1.0"?>
<rows>
  <row id="1" x="a"/>
  <row id="2" x="b"/>
</rows>"#;

/// Sample dump with uneven attribute sets across rows
#[allow(dead_code)]
pub const RAGGED_XML_DUMP: &str = r#"<?xml version="1.0"?>
<rows>
  <row id="1" x="a"/>
  <row id="2" x="b" z="extra"/>
  <row id="3" y="only-y"/>
</rows>"#;

/// Empty dump (root element with no rows)
#[allow(dead_code)]
pub const EMPTY_XML_DUMP: &str = r#"<?xml version="1.0"?>
<rows>
</rows>"#;
