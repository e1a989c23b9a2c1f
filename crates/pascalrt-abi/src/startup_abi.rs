//! Process entry bridge.
//!
//! The compiled program's entry routine is a plain C-convention function
//! taking nothing and returning `int`. [`run_program`] calls it once and
//! hands its result back unchanged, to become the process exit status.

use std::ffi::c_int;

use crate::runtime_trace;

/// Entry routine produced by the compiler.
#[cfg(target_arch = "x86")]
pub type EntryFn = unsafe extern "cdecl" fn() -> c_int;

/// Entry routine produced by the compiler.
#[cfg(not(target_arch = "x86"))]
pub type EntryFn = unsafe extern "C" fn() -> c_int;

/// Run `entry` and return its status verbatim.
///
/// # Safety
///
/// `entry` must be safe to call with no arguments under the C convention.
pub unsafe fn run_program(entry: EntryFn) -> c_int {
    runtime_trace::record_start();
    // SAFETY: upheld by the caller.
    let status = unsafe { entry() };
    runtime_trace::record_exit(status);
    status
}
