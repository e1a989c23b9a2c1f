//! Single-precision entry point generation.
//!
//! `forward32!` produces one `extern "C"` wrapper per listed function:
//! widen the `f32` argument, call the double-precision implementation, and
//! narrow the result when the target is pure math.

/// Generate single-precision forwarding entry points.
///
/// ```ignore
/// forward32! {
///     fn sin32 => pascalrt_core::math::sin as f32;   // promote, delegate, demote
///     fn iround32 => iround as c_int;               // promote, delegate
///     fn writef32 => writef;                        // promote, delegate
/// }
/// ```
///
/// Targets of the `as f32` form are safe `fn(f64) -> f64`; the other two
/// forms call `unsafe extern "C"` entry points of this crate.
macro_rules! forward32 {
    () => {};

    (
        $(#[$meta:meta])*
        fn $name:ident => $target:path as f32;
        $($rest:tt)*
    ) => {
        $(#[$meta])*
        #[cfg_attr(not(debug_assertions), unsafe(no_mangle))]
        pub unsafe extern "C" fn $name(f: f32) -> f32 {
            $crate::runtime_trace::observe_call(stringify!($name), 0);
            pascalrt_core::math::through_f64(f, $target)
        }
        forward32!($($rest)*);
    };

    (
        $(#[$meta:meta])*
        fn $name:ident => $target:path as $ret:ty;
        $($rest:tt)*
    ) => {
        $(#[$meta])*
        #[cfg_attr(not(debug_assertions), unsafe(no_mangle))]
        pub unsafe extern "C" fn $name(f: f32) -> $ret {
            unsafe { $target(pascalrt_core::math::promote(f)) }
        }
        forward32!($($rest)*);
    };

    (
        $(#[$meta:meta])*
        fn $name:ident => $target:path;
        $($rest:tt)*
    ) => {
        $(#[$meta])*
        #[cfg_attr(not(debug_assertions), unsafe(no_mangle))]
        pub unsafe extern "C" fn $name(f: f32) {
            unsafe { $target(pascalrt_core::math::promote(f)) }
        }
        forward32!($($rest)*);
    };
}
