//! Shared test utilities for level-io integration tests.

#![allow(dead_code)]

use std::io::Write;
use tempfile::NamedTempFile;

/// Write `contents` to a fresh temporary level file.
///
/// The file is deleted when the returned handle is dropped.
pub fn level_file(contents: &str) -> NamedTempFile {
    level_file_bytes(contents.as_bytes())
}

/// Same as [`level_file`] for raw bytes
pub fn level_file_bytes(contents: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp level file");
    file.write_all(contents).expect("write temp level file");
    file.flush().expect("flush temp level file");
    file
}

/// A small level: player line followed by a counted block of platforms
pub const SAMPLE_LEVEL: &str = "\
100.000000 200.000000 FF0000
2
0 0 640 32 444444
320 128 64 16 888888
";
