//! `iround`: nearest integer, halfway cases away from zero.

/// Round `x` to the nearest `i32`, ties away from zero.
///
/// Computed by adding one half to non-negative inputs (subtracting it from
/// negative ones) and truncating toward zero, not through [`f64::round`].
/// The add-then-truncate form is what compiled programs observe, including
/// its quirk at the largest double below one half.
///
/// Values outside the `i32` range saturate and NaN maps to zero.
#[inline]
#[must_use]
pub fn iround(x: f64) -> i32 {
    if x >= 0.0 {
        (x + 0.5) as i32
    } else {
        (x - 0.5) as i32
    }
}
