//! ABI layer for `new`.
//!
//! `new` is a bare `malloc`: no zero fill, no null check, no matching free.
//! A failed request hands null straight back to the program.

use std::ffi::{c_int, c_void};
use std::ptr::NonNull;

use pascalrt_core::malloc::request_bytes;

use crate::runtime_trace;

/// Allocate `size` bytes from the platform allocator.
///
/// Returns `None` when the allocator refuses the request. The block is
/// uninitialized and owned by the caller.
pub fn allocate(size: i32) -> Option<NonNull<u8>> {
    let bytes = request_bytes(size);
    // SAFETY: malloc accepts any size and reports failure as null.
    let block = unsafe { libc::malloc(bytes) };
    runtime_trace::observe_call("new", bytes);
    NonNull::new(block.cast::<u8>())
}

/// `new(size)`: a fresh heap block of `size` bytes, or null.
#[cfg_attr(not(debug_assertions), unsafe(no_mangle))]
pub unsafe extern "C" fn new(size: c_int) -> *mut c_void {
    allocate(size).map_or(std::ptr::null_mut(), |block| block.as_ptr().cast())
}
