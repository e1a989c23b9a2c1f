//! ABI layer for the write family and the line-input helpers.
//!
//! Output goes to C's `stdout` in call order. Stream errors are ignored and
//! nothing is returned: a write either lands or silently does not.

use std::ffi::{CStr, c_char, c_int};

use pascalrt_core::stdio::{LineEnd, integer_output, real_output, skip_line, text_output};

use crate::cstdio::CStream;
use crate::runtime_trace;

/// NUL-terminated bytes behind `ptr`, `None` for null.
///
/// Callers must pass null or a valid NUL-terminated string that outlives `'a`.
unsafe fn c_str_bytes<'a>(ptr: *const c_char) -> Option<&'a [u8]> {
    if ptr.is_null() {
        None
    } else {
        // SAFETY: non-null and NUL-terminated per the caller contract.
        Some(unsafe { CStr::from_ptr(ptr) }.to_bytes())
    }
}

fn emit(symbol: &'static str, bytes: &[u8]) {
    if !capture::append(bytes) {
        CStream::stdout().put(bytes);
    }
    runtime_trace::observe_call(symbol, bytes.len());
}

/// `write(s)`: the string verbatim.
#[cfg_attr(not(debug_assertions), unsafe(no_mangle))]
pub unsafe extern "C" fn write(text: *const c_char) {
    // SAFETY: compiled programs pass NUL-terminated string literals.
    let text = unsafe { c_str_bytes(text) };
    emit("write", &text_output(text, LineEnd::None));
}

/// `writeln(s)`: the string and a newline.
#[cfg_attr(not(debug_assertions), unsafe(no_mangle))]
pub unsafe extern "C" fn writeln(text: *const c_char) {
    // SAFETY: compiled programs pass NUL-terminated string literals.
    let text = unsafe { c_str_bytes(text) };
    emit("writeln", &text_output(text, LineEnd::Newline));
}

#[cfg_attr(not(debug_assertions), unsafe(no_mangle))]
pub unsafe extern "C" fn writef(x: f64) {
    emit("writef", &real_output(x, LineEnd::None));
}

#[cfg_attr(not(debug_assertions), unsafe(no_mangle))]
pub unsafe extern "C" fn writei(n: c_int) {
    emit("writei", &integer_output(n, LineEnd::None));
}

#[cfg_attr(not(debug_assertions), unsafe(no_mangle))]
pub unsafe extern "C" fn writelnf(x: f64) {
    emit("writelnf", &real_output(x, LineEnd::Newline));
}

#[cfg_attr(not(debug_assertions), unsafe(no_mangle))]
pub unsafe extern "C" fn writelni(n: c_int) {
    emit("writelni", &integer_output(n, LineEnd::Newline));
}

// Output formatting always runs in double precision.
forward32! {
    fn writef32 => writef;
    fn writelnf32 => writelnf;
}

/// True once `input` has no more bytes. Peeks one byte and pushes it back,
/// so no input is consumed.
fn at_end(input: &mut CStream) -> bool {
    match input.getc() {
        Some(byte) => {
            input.ungetc(byte);
            false
        }
        None => true,
    }
}

/// `eof()`: 1 once standard input is exhausted, else 0.
#[cfg_attr(not(debug_assertions), unsafe(no_mangle))]
pub unsafe extern "C" fn eof() -> c_int {
    let at_end = at_end(&mut CStream::stdin());
    runtime_trace::observe_call("eof", 0);
    c_int::from(at_end)
}

/// `readln()`: discard the rest of the current input line, newline included.
#[cfg_attr(not(debug_assertions), unsafe(no_mangle))]
pub unsafe extern "C" fn readln() {
    let consumed = skip_line(&mut CStream::stdin());
    runtime_trace::observe_call("readln", consumed);
}

#[cfg(debug_assertions)]
pub use capture::capture_stdout_for_tests;

#[cfg(debug_assertions)]
mod capture {
    use std::cell::RefCell;

    thread_local! {
        static CAPTURED: RefCell<Option<Vec<u8>>> = const { RefCell::new(None) };
    }

    pub(super) fn append(bytes: &[u8]) -> bool {
        CAPTURED.with(|cell| match cell.borrow_mut().as_mut() {
            Some(buf) => {
                buf.extend_from_slice(bytes);
                true
            }
            None => false,
        })
    }

    /// Run `f` with this thread's runtime output diverted into a buffer and
    /// return what it wrote.
    pub fn capture_stdout_for_tests(f: impl FnOnce()) -> Vec<u8> {
        let previous = CAPTURED.with(|cell| cell.replace(Some(Vec::new())));
        f();
        CAPTURED
            .with(|cell| cell.replace(previous))
            .unwrap_or_default()
    }
}

#[cfg(not(debug_assertions))]
mod capture {
    #[inline]
    pub(super) fn append(_bytes: &[u8]) -> bool {
        false
    }
}
