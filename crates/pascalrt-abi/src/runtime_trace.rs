//! Trace bridge for ABI entrypoints.
//!
//! Centralizes the lazily created trace emitter so entrypoints can report
//! lifecycle and call events without repeating sink setup. Every failure is
//! swallowed: tracing must never change what the program observes.

use std::sync::atomic::{AtomicPtr, AtomicU8, Ordering};

use pascalrt_core::config;
use pascalrt_core::trace::{
    EVENT_RUNTIME_CALL, EVENT_RUNTIME_EXIT, EVENT_RUNTIME_START, Severity, TraceEmitter,
    TraceRecord, process_run_id,
};

use crate::cstdio::CStream;

// Emitter lifecycle states.
const STATE_UNINIT: u8 = 0;
const STATE_INITIALIZING: u8 = 1;
const STATE_READY: u8 = 2;

// UNINIT -> INITIALIZING -> READY. A call that sees INITIALIZING drops its
// record instead of waiting.
static EMITTER_STATE: AtomicU8 = AtomicU8::new(STATE_UNINIT);
static EMITTER_PTR: AtomicPtr<TraceEmitter<CStream>> = AtomicPtr::new(std::ptr::null_mut());

fn open_sink() -> CStream {
    match config::trace_file() {
        Some(path) => CStream::open_append(&path).unwrap_or_else(|_| CStream::stderr()),
        None => CStream::stderr(),
    }
}

fn ready_emitter() -> &'static TraceEmitter<CStream> {
    // SAFETY: once READY, EMITTER_PTR is valid and never changes.
    unsafe { &*EMITTER_PTR.load(Ordering::Acquire) }
}

fn emitter() -> Option<&'static TraceEmitter<CStream>> {
    let state = EMITTER_STATE.load(Ordering::Acquire);
    if state == STATE_READY {
        return Some(ready_emitter());
    }
    if state == STATE_INITIALIZING {
        return None;
    }

    if EMITTER_STATE
        .compare_exchange(
            STATE_UNINIT,
            STATE_INITIALIZING,
            Ordering::SeqCst,
            Ordering::Relaxed,
        )
        .is_err()
    {
        return (EMITTER_STATE.load(Ordering::Acquire) == STATE_READY).then(ready_emitter);
    }

    // Leaked: the emitter lives until the process exits.
    let emitter = Box::new(TraceEmitter::new(open_sink(), process_run_id()));
    EMITTER_PTR.store(Box::into_raw(emitter), Ordering::Release);
    EMITTER_STATE.store(STATE_READY, Ordering::Release);
    Some(ready_emitter())
}

fn emit_if(enabled: bool, record: impl FnOnce() -> TraceRecord) {
    if !enabled {
        return;
    }
    if let Some(emitter) = emitter() {
        let _ = emitter.emit(record());
    }
}

pub(crate) fn record_start() {
    let level = config::trace_level();
    emit_if(level.events_enabled(), || {
        TraceRecord::new(Severity::Info, EVENT_RUNTIME_START)
            .with_field("trace_level", level.as_str())
    });
}

pub(crate) fn record_exit(exit_code: i32) {
    let level = config::trace_level();
    emit_if(level.events_enabled(), || {
        TraceRecord::new(Severity::Info, EVENT_RUNTIME_EXIT).with_exit_code(exit_code)
    });
    if level.events_enabled()
        && let Some(emitter) = emitter()
    {
        let _ = emitter.flush();
    }
}

pub(crate) fn observe_call(symbol: &'static str, bytes: usize) {
    emit_if(config::trace_level().calls_enabled(), || {
        TraceRecord::new(Severity::Debug, EVENT_RUNTIME_CALL)
            .with_symbol(symbol)
            .with_bytes(bytes as u64)
    });
}
