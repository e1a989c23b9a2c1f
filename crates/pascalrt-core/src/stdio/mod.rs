//! Rendering for the write family, plus the line-input helpers.
//!
//! Each write operation maps onto one printf conversion applied to the
//! standard output stream: `write`/`writeln` use `%s`, `writef`/`writelnf`
//! use `%g`, `writei`/`writelni` use `%d`. The `ln` variants append a single
//! newline. Rendering is separated from emission so the byte-exact output
//! can be checked without touching a real stream.

pub mod input;
pub mod printf;

pub use input::skip_line;
pub use printf::{format_decimal, format_general, format_str};

/// What a null string pointer renders as under `%s`.
pub const NULL_TEXT: &[u8] = b"(null)";

/// Trailing separator for a write operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnd {
    None,
    Newline,
}

impl LineEnd {
    fn finish(self, buf: &mut Vec<u8>) {
        if self == Self::Newline {
            buf.push(b'\n');
        }
    }
}

/// `printf("%s", text)`, `None` standing for a null pointer.
pub fn render_text(text: Option<&[u8]>, buf: &mut Vec<u8>) {
    format_str(text.unwrap_or(NULL_TEXT), buf);
}

/// `printf("%g", x)`.
pub fn render_real(x: f64, buf: &mut Vec<u8>) {
    format_general(x, buf);
}

/// `printf("%d", n)`.
pub fn render_integer(n: i32, buf: &mut Vec<u8>) {
    format_decimal(i64::from(n), buf);
}

/// Bytes emitted by `write` (`LineEnd::None`) or `writeln`.
#[must_use]
pub fn text_output(text: Option<&[u8]>, end: LineEnd) -> Vec<u8> {
    let mut buf = Vec::with_capacity(text.map_or(NULL_TEXT.len(), <[u8]>::len) + 1);
    render_text(text, &mut buf);
    end.finish(&mut buf);
    buf
}

/// Bytes emitted by `writef` or `writelnf`.
#[must_use]
pub fn real_output(x: f64, end: LineEnd) -> Vec<u8> {
    let mut buf = Vec::with_capacity(16);
    render_real(x, &mut buf);
    end.finish(&mut buf);
    buf
}

/// Bytes emitted by `writei` or `writelni`.
#[must_use]
pub fn integer_output(n: i32, end: LineEnd) -> Vec<u8> {
    let mut buf = Vec::with_capacity(12);
    render_integer(n, &mut buf);
    end.finish(&mut buf);
    buf
}
