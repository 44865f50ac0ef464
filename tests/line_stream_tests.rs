//! Integration tests for reading level files through LineStream

mod common;

use common::{level_file, level_file_bytes, SAMPLE_LEVEL};
use level_io::{LevelError, LineStream, LineStreamConfiguration, OverlongLines};

#[test]
fn test_open_nonexistent_file() {
    let result = LineStream::open("definitely/not/here/level.txt", 256);
    match result {
        Err(LevelError::Open { path, source }) => {
            assert!(path.ends_with("level.txt"));
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("expected open error, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_open_error_message_carries_system_text() {
    let err = LineStream::open("definitely/not/here/level.txt", 256).unwrap_err();
    let message = err.to_string();
    assert!(message.starts_with("Could not open file 'definitely/not/here/level.txt': "));
}

#[test]
fn test_open_rejects_capacity_before_opening() {
    // capacity is checked first, so even a missing file reports the capacity
    let err = LineStream::open("definitely/not/here/level.txt", 1).unwrap_err();
    assert!(matches!(err, LevelError::InvalidCapacity(1)));
}

#[test]
fn test_read_sample_level() {
    let file = level_file(SAMPLE_LEVEL);
    let mut stream = LineStream::open(file.path(), 256).unwrap();

    assert_eq!(
        stream.next_line().unwrap(),
        Some(&b"100.000000 200.000000 FF0000\n"[..])
    );
    assert_eq!(stream.next_line().unwrap(), Some(&b"2\n"[..]));
    let platforms = stream.collect_n_lines(2).unwrap();
    assert_eq!(platforms, "0 0 640 32 444444\n320 128 64 16 888888\n");
    assert_eq!(stream.next_line().unwrap(), None);
    assert_eq!(stream.line_number(), 4);
}

#[test]
fn test_small_capacity_reads_whole_lines() {
    let file = level_file(SAMPLE_LEVEL);
    let mut stream = LineStream::open(file.path(), 5).unwrap();
    assert_eq!(stream.capacity(), 5);
    assert_eq!(stream.collect_until_end(), SAMPLE_LEVEL);
}

#[test]
fn test_keep_tail_policy_on_file() {
    let file = level_file("abcdefghij\nk\n");
    let config = LineStreamConfiguration {
        capacity: 4,
        overlong_lines: OverlongLines::KeepTail,
    };
    let mut stream = LineStream::open_with(file.path(), config).unwrap();
    // chunks of the first line: "abc" "def" "ghi" "j\n"
    assert_eq!(stream.next_line().unwrap(), Some(&b"j\n"[..]));
    assert_eq!(stream.next_line().unwrap(), Some(&b"k\n"[..]));
}

#[test]
fn test_collect_n_lines_exact_and_insufficient() {
    let file = level_file("a\nb\nc\n");

    let mut stream = LineStream::open(file.path(), 16).unwrap();
    assert_eq!(stream.collect_n_lines(3).unwrap(), "a\nb\nc\n");

    let mut stream = LineStream::open(file.path(), 16).unwrap();
    assert!(matches!(
        stream.collect_n_lines(4),
        Err(LevelError::InsufficientLines {
            expected: 4,
            found: 3
        })
    ));
}

#[test]
fn test_collect_n_lines_zero_consumes_nothing() {
    let file = level_file("first\n");
    let mut stream = LineStream::open(file.path(), 16).unwrap();
    assert_eq!(stream.collect_n_lines(0).unwrap(), "");
    assert_eq!(stream.next_line().unwrap(), Some(&b"first\n"[..]));
}

#[test]
fn test_empty_file() {
    let file = level_file("");
    let mut stream = LineStream::open(file.path(), 16).unwrap();
    assert_eq!(stream.next_line().unwrap(), None);
    assert_eq!(stream.collect_until_end(), "");
    assert_eq!(stream.try_collect_until_end().unwrap(), "");
}

#[test]
fn test_windows_1252_level_file() {
    let file = level_file_bytes(b"caf\xE9\n");
    let mut stream = LineStream::open(file.path(), 16).unwrap();
    assert_eq!(stream.collect_until_end(), "café\n");
}

#[test]
fn test_lines_iterator_over_file() {
    let file = level_file(SAMPLE_LEVEL);
    let mut stream = LineStream::open(file.path(), 8).unwrap();
    let lines: Vec<String> = stream.lines().map(|line| line.unwrap()).collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[1], "2\n");
    assert_eq!(lines.concat(), SAMPLE_LEVEL);
}
