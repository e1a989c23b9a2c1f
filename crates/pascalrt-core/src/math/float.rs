//! Double-precision math delegates.

#[inline]
pub fn sin(x: f64) -> f64 {
    x.sin()
}

#[inline]
pub fn cos(x: f64) -> f64 {
    x.cos()
}

#[inline]
pub fn sqrt(x: f64) -> f64 {
    x.sqrt()
}

#[inline]
pub fn exp(x: f64) -> f64 {
    x.exp()
}

/// C `round`: nearest integer, halfway cases away from zero.
#[inline]
pub fn round(x: f64) -> f64 {
    x.round()
}
