mod helpers;

use ferrous_qtype_application::ports::lock_sink;
use ferrous_qtype_application::use_cases::{ResolveQueryTypesUseCase, TransformStats};
use ferrous_qtype_domain::DomainError;
use helpers::MockRecordSink;
use std::io::Cursor;
use std::sync::{Arc, Mutex};

fn run(input: &[u8]) -> (Result<TransformStats, DomainError>, MockRecordSink) {
    let mut sink = MockRecordSink::new();
    let result = ResolveQueryTypesUseCase::new().execute(Cursor::new(input), &mut sink);
    (result, sink)
}

#[test]
fn test_execute_end_to_end_sample() {
    // Arrange
    let input = b"a.example.com 1\nb.example.com 28\nc.example.com 9999\n";

    // Act
    let (result, sink) = run(input);

    // Assert
    let stats = result.unwrap();
    assert_eq!(
        sink.lines(),
        vec![
            "a.example.com\tA",
            "b.example.com\tAAAA",
            "c.example.com\tTYPE9999",
        ]
    );
    assert_eq!(stats.written, 3);
    assert!(sink.reports.is_empty());
}

#[test]
fn test_execute_empty_input() {
    let (result, sink) = run(b"");

    assert_eq!(result.unwrap(), TransformStats::default());
    assert!(sink.records.is_empty());
    assert_eq!(sink.flushes, 1);
}

#[test]
fn test_execute_blank_lines_only() {
    let (result, sink) = run(b"\n   \n\t\n\r\n");

    let stats = result.unwrap();
    assert_eq!(stats.blank, 4);
    assert_eq!(stats.written, 0);
    assert!(sink.records.is_empty());
    assert!(sink.reports.is_empty());
}

#[test]
fn test_execute_reports_non_numeric_qtype_and_continues() {
    // Arrange
    let input = b"example.com abc\nnext.example.com 16\n";

    // Act
    let (result, sink) = run(input);

    // Assert
    let stats = result.unwrap();
    assert_eq!(stats.invalid, 1);
    assert_eq!(stats.written, 1);
    assert_eq!(sink.lines(), vec!["next.example.com\tTXT"]);
    assert_eq!(
        sink.reports,
        vec![DomainError::InvalidQueryType {
            token: "abc".to_string(),
            domain: "example.com".to_string(),
        }]
    );
}

#[test]
fn test_execute_missing_qtype_is_silent() {
    let (result, sink) = run(b"example.com\n");

    let stats = result.unwrap();
    assert_eq!(stats.incomplete, 1);
    assert!(sink.records.is_empty());
    assert!(sink.reports.is_empty());
}

#[test]
fn test_execute_preserves_input_order() {
    let input = b"z.test 2\n\ny.test x\na.test 15\nm.test\nb.test 0\n";

    let (result, sink) = run(input);

    let stats = result.unwrap();
    assert_eq!(sink.lines(), vec!["z.test\tNS", "a.test\tMX", "b.test\tTYPE0"]);
    assert_eq!(stats.lines(), 6);
    assert_eq!(stats.invalid, 1);
}

#[test]
fn test_execute_last_line_without_newline() {
    let (_, sink) = run(b"a.test 1\nb.test 257");

    assert_eq!(sink.lines(), vec!["a.test\tA", "b.test\tCAA"]);
}

#[test]
fn test_execute_invalid_utf8_is_decoded_lossily() {
    let (result, sink) = run(b"caf\xff.test 1\nok.test 28\n");

    assert_eq!(result.unwrap().written, 2);
    assert_eq!(sink.lines()[0], "caf\u{fffd}.test\tA");
    assert_eq!(sink.lines()[1], "ok.test\tAAAA");
}

#[test]
fn test_execute_is_idempotent() {
    let input = b"a.example.com 1\nbad.example.com nope\nb.example.com 65\n";

    let (_, first) = run(input);
    let (_, second) = run(input);

    assert_eq!(first.lines(), second.lines());
    assert_eq!(first.reports, second.reports);
}

#[test]
fn test_execute_sink_failure_aborts() {
    let mut sink = MockRecordSink::failing();

    let result =
        ResolveQueryTypesUseCase::new().execute(Cursor::new(&b"a.test 1\n"[..]), &mut sink);

    assert!(matches!(result, Err(DomainError::IoError(_))));
}

#[test]
fn test_execute_accepts_cr_only_line_endings() {
    let (result, sink) = run(b"a.test 1\rb.test 28\rc.test 16");

    let stats = result.unwrap();
    assert_eq!(sink.lines(), vec!["a.test\tA", "b.test\tAAAA", "c.test\tTXT"]);
    assert_eq!(stats.invalid, 0);
}

#[test]
fn test_execute_mixed_line_endings() {
    let (result, sink) = run(b"a.test 1\r\nb.test 2\rc.test 5\n\r\nd.test 6\r");

    let stats = result.unwrap();
    assert_eq!(
        sink.lines(),
        vec!["a.test\tA", "b.test\tNS", "c.test\tCNAME", "d.test\tSOA"]
    );
    assert_eq!(stats.blank, 1);
    assert_eq!(stats.lines(), 5);
}

#[test]
fn test_execute_wide_qtype_is_written() {
    let (result, sink) = run(b"big.test 99999999999999999999\n");

    assert_eq!(result.unwrap().written, 1);
    assert_eq!(sink.lines(), vec!["big.test\tTYPE99999999999999999999"]);
}

#[test]
fn test_execute_through_shared_sink() {
    // Arrange
    let shared = Arc::new(Mutex::new(MockRecordSink::new()));
    let mut handle = Arc::clone(&shared);

    // Act
    let stats = ResolveQueryTypesUseCase::new()
        .execute(Cursor::new(&b"a.test 1\nb.test abc\n"[..]), &mut handle)
        .unwrap();

    // Assert
    let sink = lock_sink(&shared);
    assert_eq!(stats.written, 1);
    assert_eq!(sink.lines(), vec!["a.test\tA"]);
    assert_eq!(sink.reports.len(), 1);
    assert_eq!(sink.flushes, 1);
}
