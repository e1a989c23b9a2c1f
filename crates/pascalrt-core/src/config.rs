//! Diagnostics configuration.
//!
//! Tracing is off unless requested through the environment:
//! - `PASCALRT_TRACE`: `off` (default), `events` (runtime start and exit), or
//!   `calls` (events plus one record per runtime call).
//! - `PASCALRT_TRACE_FILE`: append records to this path instead of stderr.
//!
//! With tracing off the runtime produces no output beyond what the program
//! itself writes to standard output.

use std::path::PathBuf;
use std::sync::atomic::{AtomicU8, Ordering};

use crate::error::ConfigError;

/// Environment variable selecting the trace level.
pub const TRACE_ENV: &str = "PASCALRT_TRACE";
/// Environment variable naming the trace file.
pub const TRACE_FILE_ENV: &str = "PASCALRT_TRACE_FILE";

/// How much the runtime reports about itself.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraceLevel {
    /// No records at all.
    #[default]
    Off,
    /// `runtime_start` and `runtime_exit` only.
    Events,
    /// Lifecycle events plus a `runtime_call` record per ABI call.
    Calls,
}

impl TraceLevel {
    /// Parse a level name (case-insensitive), rejecting unknown values.
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "off" | "0" | "none" | "disabled" | "" => Ok(Self::Off),
            "events" | "1" | "on" | "lifecycle" => Ok(Self::Events),
            "calls" | "2" | "all" | "verbose" => Ok(Self::Calls),
            _ => Err(ConfigError::UnknownTraceLevel(s.to_string())),
        }
    }

    /// Parse a level name, mapping anything unknown to `Off`.
    #[must_use]
    pub fn from_str_loose(s: &str) -> Self {
        Self::parse(s).unwrap_or_default()
    }

    #[must_use]
    pub const fn events_enabled(self) -> bool {
        !matches!(self, Self::Off)
    }

    #[must_use]
    pub const fn calls_enabled(self) -> bool {
        matches!(self, Self::Calls)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Events => "events",
            Self::Calls => "calls",
        }
    }
}

// Atomic cache: 0=unresolved, 1=Off, 2=Events, 3=Calls, 255=resolving.
static CACHED_LEVEL: AtomicU8 = AtomicU8::new(LEVEL_UNRESOLVED);

const LEVEL_UNRESOLVED: u8 = 0;
const LEVEL_OFF: u8 = 1;
const LEVEL_EVENTS: u8 = 2;
const LEVEL_CALLS: u8 = 3;
const LEVEL_RESOLVING: u8 = 255;

fn level_to_u8(level: TraceLevel) -> u8 {
    match level {
        TraceLevel::Off => LEVEL_OFF,
        TraceLevel::Events => LEVEL_EVENTS,
        TraceLevel::Calls => LEVEL_CALLS,
    }
}

fn u8_to_level(v: u8) -> TraceLevel {
    match v {
        LEVEL_EVENTS => TraceLevel::Events,
        LEVEL_CALLS => TraceLevel::Calls,
        _ => TraceLevel::Off,
    }
}

/// Resolve a level from an optional raw environment value.
#[must_use]
pub fn resolve_level(raw: Option<&str>) -> TraceLevel {
    raw.map(TraceLevel::from_str_loose).unwrap_or_default()
}

/// The configured trace level (reads the environment on first call, cached
/// thereafter).
///
/// A caller that arrives while another one is still resolving sees `Off`
/// rather than blocking.
#[must_use]
pub fn trace_level() -> TraceLevel {
    let cached = CACHED_LEVEL.load(Ordering::Acquire);
    if cached != LEVEL_UNRESOLVED && cached != LEVEL_RESOLVING {
        return u8_to_level(cached);
    }
    if cached == LEVEL_RESOLVING {
        return TraceLevel::Off;
    }

    if CACHED_LEVEL
        .compare_exchange(
            LEVEL_UNRESOLVED,
            LEVEL_RESOLVING,
            Ordering::SeqCst,
            Ordering::Relaxed,
        )
        .is_err()
    {
        let v = CACHED_LEVEL.load(Ordering::Acquire);
        return if v != LEVEL_UNRESOLVED && v != LEVEL_RESOLVING {
            u8_to_level(v)
        } else {
            TraceLevel::Off
        };
    }

    let raw = std::env::var(TRACE_ENV).ok();
    let level = resolve_level(raw.as_deref());
    CACHED_LEVEL.store(level_to_u8(level), Ordering::Release);
    level
}

/// Destination file for trace records, if one is configured.
#[must_use]
pub fn trace_file() -> Option<PathBuf> {
    std::env::var_os(TRACE_FILE_ENV)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}
