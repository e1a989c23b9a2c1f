//! Integration test: trace files produced by the core emitter validate.
//!
//! Run: cargo test -p pascalrt-harness --test trace_validation_test

use std::fs;
use std::path::PathBuf;

use pascalrt_core::trace::{
    EVENT_RUNTIME_CALL, EVENT_RUNTIME_EXIT, EVENT_RUNTIME_START, Severity, TraceEmitter,
    TraceRecord,
};
use pascalrt_harness::HarnessError;
use pascalrt_harness::structured_log::validate_trace_file;

fn scratch(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("pascalrt-harness-{}-{name}", std::process::id()))
}

fn emitted_trace() -> Vec<u8> {
    let emitter = TraceEmitter::new(Vec::new(), "pascalrt-test");
    emitter
        .emit(TraceRecord::new(Severity::Info, EVENT_RUNTIME_START))
        .unwrap();
    emitter
        .emit(
            TraceRecord::new(Severity::Debug, EVENT_RUNTIME_CALL)
                .with_symbol("writelni")
                .with_bytes(3),
        )
        .unwrap();
    emitter
        .emit(TraceRecord::new(Severity::Info, EVENT_RUNTIME_EXIT).with_exit_code(0))
        .unwrap();
    emitter.into_inner()
}

#[test]
fn emitter_output_validates() {
    let path = scratch("valid.jsonl");
    fs::write(&path, emitted_trace()).unwrap();

    let report = validate_trace_file(&path).unwrap();
    assert_eq!(report.total_lines, 3);
    assert!(report.is_valid(), "{:?}", report.errors);

    let _ = fs::remove_file(&path);
}

#[test]
fn bad_lines_are_reported_with_line_numbers() {
    let path = scratch("invalid.jsonl");
    let mut content = emitted_trace();
    content.extend_from_slice(b"\nnot json\n");
    content.extend_from_slice(
        br#"{"timestamp":"t","trace_id":"r::9","level":"fatal","event":"runtime_start"}"#,
    );
    fs::write(&path, content).unwrap();

    let report = validate_trace_file(&path).unwrap();
    assert_eq!(report.total_lines, 5);
    assert_eq!(report.invalid_lines(), 2);
    assert_eq!(report.errors[0].line_number, 5);
    assert_eq!(report.errors[0].field, "<json>");
    assert_eq!(report.errors[1].line_number, 6);
    assert_eq!(report.errors[1].field, "level");

    let _ = fs::remove_file(&path);
}

#[test]
fn missing_file_is_an_io_error() {
    let err = validate_trace_file(&scratch("does-not-exist.jsonl")).unwrap_err();
    assert!(matches!(err, HarnessError::Io { .. }));
}
