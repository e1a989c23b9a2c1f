//! Structured JSONL trace records for the runtime.
//!
//! Provides:
//! - [`TraceRecord`]: one JSON object per line with required + optional fields.
//! - [`TraceEmitter`]: numbers records and writes them to any [`Write`] sink.
//!
//! Required fields: `timestamp`, `trace_id`, `level`, `event`.

use std::io::Write;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::error::TraceError;

/// Emitted once before control passes to the compiled program.
pub const EVENT_RUNTIME_START: &str = "runtime_start";
/// Emitted once the compiled program's entry function returns.
pub const EVENT_RUNTIME_EXIT: &str = "runtime_exit";
/// Emitted per runtime call when call tracing is on.
pub const EVENT_RUNTIME_CALL: &str = "runtime_call";

/// Every event name a record may carry.
pub const KNOWN_EVENTS: [&str; 3] = [EVENT_RUNTIME_START, EVENT_RUNTIME_EXIT, EVENT_RUNTIME_CALL];

/// Severity of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl Severity {
    pub const ALL: [&'static str; 5] = ["trace", "debug", "info", "warn", "error"];
}

/// One trace line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceRecord {
    // Required
    pub timestamp: String,
    pub trace_id: String,
    pub level: Severity,
    pub event: String,

    // Optional
    /// Runtime symbol the record concerns (`writeln`, `new`, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exit_code: Option<i32>,
    /// Bytes written or requested by the call.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bytes: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl TraceRecord {
    /// A record with required fields only; `trace_id` is assigned on emit.
    #[must_use]
    pub fn new(level: Severity, event: impl Into<String>) -> Self {
        Self {
            timestamp: now_utc(),
            trace_id: String::new(),
            level,
            event: event.into(),
            symbol: None,
            exit_code: None,
            bytes: None,
            details: None,
        }
    }

    #[must_use]
    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    #[must_use]
    pub fn with_exit_code(mut self, exit_code: i32) -> Self {
        self.exit_code = Some(exit_code);
        self
    }

    #[must_use]
    pub fn with_bytes(mut self, bytes: u64) -> Self {
        self.bytes = Some(bytes);
        self
    }

    /// Add one key to the `details` object, creating it if needed.
    #[must_use]
    pub fn with_field(mut self, key: &str, value: impl Into<serde_json::Value>) -> Self {
        let details = self
            .details
            .get_or_insert_with(|| serde_json::Value::Object(serde_json::Map::new()));
        if let Some(map) = details.as_object_mut() {
            map.insert(key.to_string(), value.into());
        }
        self
    }

    /// Serialize to a single JSONL line (no trailing newline).
    pub fn to_jsonl(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Writes numbered trace records to a sink.
///
/// Trace ids are `<run_id>::<seq>` with a six-digit, one-based sequence.
pub struct TraceEmitter<W: Write> {
    writer: Mutex<W>,
    seq: AtomicU64,
    run_id: String,
}

impl<W: Write> TraceEmitter<W> {
    pub fn new(writer: W, run_id: impl Into<String>) -> Self {
        Self {
            writer: Mutex::new(writer),
            seq: AtomicU64::new(0),
            run_id: run_id.into(),
        }
    }

    fn next_trace_id(&self) -> String {
        let seq = self.seq.fetch_add(1, Ordering::Relaxed) + 1;
        format!("{}::{seq:06}", self.run_id)
    }

    /// Emit `record`, assigning a trace id when it has none.
    pub fn emit(&self, mut record: TraceRecord) -> Result<TraceRecord, TraceError> {
        if record.trace_id.is_empty() {
            record.trace_id = self.next_trace_id();
        }
        let line = record.to_jsonl()?;
        let mut writer = self.writer.lock();
        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")?;
        Ok(record)
    }

    pub fn flush(&self) -> Result<(), TraceError> {
        self.writer.lock().flush()?;
        Ok(())
    }

    /// Consume the emitter and return its sink.
    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

/// Run id for the current process.
#[must_use]
pub fn process_run_id() -> String {
    format!("pascalrt-{}", std::process::id())
}

/// Current UTC time as `YYYY-MM-DDTHH:MM:SS.mmmZ`.
#[must_use]
pub fn now_utc() -> String {
    let duration = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default();
    format_utc(duration.as_secs(), duration.subsec_millis())
}

/// Format seconds since the Unix epoch as an RFC 3339 UTC timestamp.
#[must_use]
pub fn format_utc(secs: u64, millis: u32) -> String {
    let days = secs / 86_400;
    let rem = secs % 86_400;
    let (year, month, day) = civil_from_days(days);
    format!(
        "{year:04}-{month:02}-{day:02}T{:02}:{:02}:{:02}.{millis:03}Z",
        rem / 3600,
        (rem % 3600) / 60,
        rem % 60,
    )
}

// Days since 1970-01-01 to a proleptic Gregorian date.
fn civil_from_days(days: u64) -> (u64, u64, u64) {
    let z = days + 719_468;
    let era = z / 146_097;
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe + era * 400 + u64::from(month <= 2);
    (year, month, day)
}
