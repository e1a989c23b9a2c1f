//! ABI layer for the numeric helpers.
//!
//! Double-precision `sin`, `cos`, `sqrt`, `exp` and `round` come from the
//! platform libm and are not re-exported here; only the helpers the C math
//! library lacks and their single-precision forms are.

use std::ffi::c_int;

use crate::runtime_trace;

/// `iround(x)`: round half away from zero and truncate to `int`.
#[cfg_attr(not(debug_assertions), unsafe(no_mangle))]
pub unsafe extern "C" fn iround(x: f64) -> c_int {
    runtime_trace::observe_call("iround", 0);
    pascalrt_core::math::iround(x)
}

forward32! {
    fn sin32 => pascalrt_core::math::sin as f32;
    fn cos32 => pascalrt_core::math::cos as f32;
    fn sqrt32 => pascalrt_core::math::sqrt as f32;
    fn exp32 => pascalrt_core::math::exp as f32;
    fn round32 => pascalrt_core::math::round as f32;
    /// Integer result: callers read it from the integer return register.
    fn iround32 => iround as c_int;
}
