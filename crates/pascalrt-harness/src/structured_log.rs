//! Validation for the runtime's JSONL trace output.
//!
//! Each line must deserialize as a [`TraceRecord`] and satisfy the field
//! contracts below. Lines are checked independently so one bad record does
//! not hide the rest.

use std::path::Path;

use pascalrt_core::trace::{
    EVENT_RUNTIME_CALL, EVENT_RUNTIME_EXIT, KNOWN_EVENTS, Severity, TraceRecord,
};

use crate::error::HarnessError;
use crate::symbols;

/// Validation error for a trace line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceValidationError {
    pub line_number: usize,
    pub field: String,
    pub message: String,
}

impl TraceValidationError {
    fn new(line_number: usize, field: &str, message: impl Into<String>) -> Self {
        Self {
            line_number,
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for TraceValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "line {}: field '{}': {}",
            self.line_number, self.field, self.message
        )
    }
}

/// Summary of a validated trace file.
#[derive(Debug, Default)]
pub struct TraceReport {
    pub total_lines: usize,
    pub errors: Vec<TraceValidationError>,
}

impl TraceReport {
    #[must_use]
    pub fn invalid_lines(&self) -> usize {
        let mut lines: Vec<usize> = self.errors.iter().map(|e| e.line_number).collect();
        lines.dedup();
        lines.len()
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Validate a single JSONL line.
pub fn validate_trace_line(
    line: &str,
    line_number: usize,
) -> Result<TraceRecord, Vec<TraceValidationError>> {
    let mut errors = Vec::new();

    let value: serde_json::Value = match serde_json::from_str(line) {
        Ok(v) => v,
        Err(e) => {
            errors.push(TraceValidationError::new(
                line_number,
                "<json>",
                format!("invalid JSON: {e}"),
            ));
            return Err(errors);
        }
    };

    let Some(obj) = value.as_object() else {
        errors.push(TraceValidationError::new(
            line_number,
            "<root>",
            "expected JSON object",
        ));
        return Err(errors);
    };

    for field in ["timestamp", "trace_id", "level", "event"] {
        if !obj.contains_key(field) {
            errors.push(TraceValidationError::new(
                line_number,
                field,
                "required field missing",
            ));
        }
    }

    if let Some(level) = obj.get("level").and_then(|v| v.as_str())
        && !Severity::ALL.contains(&level)
    {
        errors.push(TraceValidationError::new(
            line_number,
            "level",
            format!("invalid level: '{level}'"),
        ));
    }

    let event = obj.get("event").and_then(|v| v.as_str());
    if let Some(event) = event
        && !KNOWN_EVENTS.contains(&event)
    {
        errors.push(TraceValidationError::new(
            line_number,
            "event",
            format!("unknown event: '{event}'"),
        ));
    }

    // <run_id>::<seq>
    if let Some(trace_id) = obj.get("trace_id").and_then(|v| v.as_str())
        && !trace_id
            .rsplit_once("::")
            .is_some_and(|(run, seq)| !run.is_empty() && seq.parse::<u64>().is_ok())
    {
        errors.push(TraceValidationError::new(
            line_number,
            "trace_id",
            format!("trace_id should follow <run_id>::<seq> format, got: '{trace_id}'"),
        ));
    }

    if event == Some(EVENT_RUNTIME_EXIT) && !obj.get("exit_code").is_some_and(|v| v.is_i64()) {
        errors.push(TraceValidationError::new(
            line_number,
            "exit_code",
            "runtime_exit events must include an integer exit_code",
        ));
    }

    if event == Some(EVENT_RUNTIME_CALL) {
        match obj.get("symbol").and_then(|v| v.as_str()) {
            Some(name) if symbols::find(name).is_some() => {}
            Some(name) => errors.push(TraceValidationError::new(
                line_number,
                "symbol",
                format!("not a runtime symbol: '{name}'"),
            )),
            None => errors.push(TraceValidationError::new(
                line_number,
                "symbol",
                "runtime_call events must name the symbol",
            )),
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    serde_json::from_value::<TraceRecord>(value).map_err(|e| {
        vec![TraceValidationError::new(
            line_number,
            "<deserialization>",
            format!("failed to deserialize: {e}"),
        )]
    })
}

/// Validate an entire JSONL file, skipping blank lines.
pub fn validate_trace_file(path: &Path) -> Result<TraceReport, HarnessError> {
    let content = std::fs::read_to_string(path).map_err(|e| HarnessError::io(path, e))?;
    let mut report = TraceReport::default();

    for (i, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        report.total_lines += 1;
        if let Err(errs) = validate_trace_line(line, i + 1) {
            report.errors.extend(errs);
        }
    }

    Ok(report)
}
