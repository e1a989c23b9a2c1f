//! Integration tests for the write family.
//!
//! Exports are mangled in debug builds, so these call the Rust paths directly
//! and read the output back through the per-thread capture buffer.
#![cfg(debug_assertions)]

use std::ffi::CString;

use pascalrt_abi::stdio_abi::{
    capture_stdout_for_tests, write, writef, writef32, writei, writeln, writelnf, writelnf32,
    writelni,
};

fn captured(f: impl FnOnce()) -> String {
    String::from_utf8(capture_stdout_for_tests(f)).expect("runtime output is ASCII")
}

#[test]
fn writes_concatenate_in_call_order() {
    let out = captured(|| unsafe {
        write(c"abc".as_ptr());
        write(c"def".as_ptr());
    });
    assert_eq!(out, "abcdef");
}

#[test]
fn writeln_appends_newline() {
    let out = captured(|| unsafe { writeln(c"abc".as_ptr()) });
    assert_eq!(out, "abc\n");
}

#[test]
fn empty_and_null_strings() {
    let out = captured(|| unsafe {
        write(c"".as_ptr());
        writeln(c"".as_ptr());
        write(std::ptr::null());
    });
    assert_eq!(out, "\n(null)");
}

#[test]
fn string_is_written_verbatim() {
    let text = CString::new("100% \\n {}").expect("no interior NUL");
    let out = captured(|| unsafe { write(text.as_ptr()) });
    assert_eq!(out, "100% \\n {}");
}

#[test]
fn integers_print_as_decimal() {
    let out = captured(|| unsafe {
        writei(42);
        write(c" ".as_ptr());
        writei(-7);
        writelni(0);
        writelni(i32::MIN);
    });
    assert_eq!(out, "42 -70\n-2147483648\n");
}

#[test]
fn reals_print_shortest_general_form() {
    let out = captured(|| unsafe {
        writelnf(3.14);
        writelnf(2.0);
        writelnf(0.1);
        writelnf(1e6);
        writelnf(123456.0);
        writelnf(1e-5);
        writef(-0.0);
    });
    assert_eq!(out, "3.14\n2\n0.1\n1e+06\n123456\n1e-05\n-0");
}

#[test]
fn non_finite_reals() {
    let out = captured(|| unsafe {
        writelnf(f64::INFINITY);
        writelnf(f64::NEG_INFINITY);
        writef(f64::NAN);
    });
    assert_eq!(out, "inf\n-inf\nnan");
}

#[test]
fn single_precision_writes_match_widened_double() {
    for f in [3.14_f32, 0.1, 1.0e-7, -2.5, 16_777_216.0] {
        let narrow = captured(|| unsafe {
            writef32(f);
            writelnf32(f);
        });
        let wide = captured(|| unsafe {
            writef(f64::from(f));
            writelnf(f64::from(f));
        });
        assert_eq!(narrow, wide, "f = {f:e}");
    }
}

#[test]
fn float_32_prints_widened_value() {
    let out = captured(|| unsafe { writef32(0.1) });
    assert_eq!(out, "0.1");
}
