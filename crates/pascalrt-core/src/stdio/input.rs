//! Line-oriented input helpers behind `readln` and `eof`.

/// Consume bytes up to and including the next newline.
///
/// Returns the number of bytes consumed; stops early at end of input.
pub fn skip_line<I: Iterator<Item = u8>>(input: &mut I) -> usize {
    let mut consumed = 0;
    for byte in input {
        consumed += 1;
        if byte == b'\n' {
            break;
        }
    }
    consumed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stops_after_newline() {
        let mut input = b"first line\nsecond".iter().copied();
        assert_eq!(skip_line(&mut input), 11);
        assert_eq!(input.collect::<Vec<u8>>(), b"second");
    }

    #[test]
    fn drains_unterminated_input() {
        let mut input = b"tail".iter().copied();
        assert_eq!(skip_line(&mut input), 4);
        assert_eq!(input.next(), None);
        assert_eq!(skip_line(&mut input), 0);
    }

    #[test]
    fn empty_line_consumes_only_the_newline() {
        let mut input = b"\n\nx".iter().copied();
        assert_eq!(skip_line(&mut input), 1);
        assert_eq!(skip_line(&mut input), 1);
        assert_eq!(input.next(), Some(b'x'));
    }
}
