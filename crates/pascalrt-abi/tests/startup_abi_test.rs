//! Integration tests for the entry bridge.

use std::ffi::c_int;
use std::sync::atomic::{AtomicUsize, Ordering};

use pascalrt_abi::startup_abi::{EntryFn, run_program};

static ENTRY_CALLS: AtomicUsize = AtomicUsize::new(0);

// Define an entry routine with the same convention `EntryFn` uses.
macro_rules! entry {
    ($name:ident => $body:expr) => {
        #[cfg(target_arch = "x86")]
        unsafe extern "cdecl" fn $name() -> c_int {
            $body
        }
        #[cfg(not(target_arch = "x86"))]
        unsafe extern "C" fn $name() -> c_int {
            $body
        }
    };
}

entry!(returns_seven => 7);
entry!(returns_zero => 0);
entry!(returns_negative => -1);
entry!(counts_calls => {
    ENTRY_CALLS.fetch_add(1, Ordering::SeqCst);
    3
});

#[test]
fn status_is_entry_result() {
    unsafe {
        assert_eq!(run_program(returns_seven), 7);
        assert_eq!(run_program(returns_zero), 0);
        assert_eq!(run_program(returns_negative), -1);
    }
}

#[test]
fn entry_runs_exactly_once_per_call() {
    let entry: EntryFn = counts_calls;
    let before = ENTRY_CALLS.load(Ordering::SeqCst);
    assert_eq!(unsafe { run_program(entry) }, 3);
    assert_eq!(ENTRY_CALLS.load(Ordering::SeqCst), before + 1);
}
