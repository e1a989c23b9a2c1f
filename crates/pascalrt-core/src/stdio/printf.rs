//! printf rendering for the three conversions the write family uses: bare
//! `%d`, `%s` and `%g`, with no flags, width or precision.
//!
//! Digit generation uses Rust's exact float formatting; exponent selection
//! and trailing-zero removal follow ISO C11 7.21.6.1.

use std::fmt::Write as _;

/// Significant digits of `%g` at its default precision.
pub const GENERAL_PRECISION: usize = 6;
const GENERAL_PRECISION_EXP: i32 = GENERAL_PRECISION as i32;

/// `%d`: signed decimal.
pub fn format_decimal(value: i64, buf: &mut Vec<u8>) {
    let mut digits = String::with_capacity(20);
    // Writing into a String cannot fail.
    let _ = write!(digits, "{value}");
    buf.extend_from_slice(digits.as_bytes());
}

/// `%s`: the bytes verbatim, without a NUL terminator.
pub fn format_str(s: &[u8], buf: &mut Vec<u8>) {
    buf.extend_from_slice(s);
}

/// `%g`: `%e` or `%f` depending on the decimal exponent after rounding to
/// six significant digits, trailing zeros removed.
pub fn format_general(value: f64, buf: &mut Vec<u8>) {
    if value.is_sign_negative() {
        buf.push(b'-');
    }
    if value.is_nan() {
        buf.extend_from_slice(b"nan");
        return;
    }
    if value.is_infinite() {
        buf.extend_from_slice(b"inf");
        return;
    }
    buf.extend_from_slice(general_digits(value.abs()).as_bytes());
}

/// `%g` body of a non-negative finite value.
fn general_digits(value: f64) -> String {
    let sig = GENERAL_PRECISION - 1;
    let sci = format!("{value:.sig$e}");
    let (mantissa, exp) = split_exponent(&sci);

    // C11: fixed notation when -4 <= X < P.
    if (-4..GENERAL_PRECISION_EXP).contains(&exp) {
        let frac = usize::try_from(GENERAL_PRECISION_EXP - 1 - exp).unwrap_or(0);
        let mut s = format!("{value:.frac$}");
        strip_trailing_zeros(&mut s);
        s
    } else {
        let mut s = String::from(mantissa);
        strip_trailing_zeros(&mut s);
        push_exponent(&mut s, exp);
        s
    }
}

fn strip_trailing_zeros(s: &mut String) {
    if !s.contains('.') {
        return;
    }
    while s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('.') {
        s.pop();
    }
}

/// Split Rust's `LowerExp` output (`"3.14000e0"`, `"1e-5"`) into mantissa and
/// exponent.
fn split_exponent(sci: &str) -> (&str, i32) {
    match sci.split_once('e') {
        Some((mantissa, exp)) => (mantissa, exp.parse().unwrap_or(0)),
        None => (sci, 0),
    }
}

/// Append a C-style exponent: sign and at least two digits.
fn push_exponent(s: &mut String, exp: i32) {
    let sign = if exp < 0 { '-' } else { '+' };
    let _ = write!(s, "e{sign}{:02}", exp.unsigned_abs());
}
