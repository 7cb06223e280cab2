//! Lexical helpers shared by the decoder and [`Number`](crate::Number) parsing.

use crate::error::DecodeError;

/// Scan a JSON number literal starting at `start`.
///
/// Accepts exactly `-?(0|[1-9][0-9]*)(\.[0-9]+)?([eE][+-]?[0-9]+)?` and
/// returns the offset one past the last byte of the literal. On failure the
/// error holds the offset of the first offending byte.
pub(crate) fn scan_number(data: &[u8], start: usize) -> Result<usize, usize> {
    let len = data.len();
    let mut x = start;
    if x < len && data[x] == b'-' {
        x += 1;
    }
    match data.get(x) {
        Some(b'0') => x += 1,
        Some(b'1'..=b'9') => {
            while x < len && data[x].is_ascii_digit() {
                x += 1;
            }
        }
        _ => return Err(x),
    }
    if x < len && data[x] == b'.' {
        x += 1;
        let digits = x;
        while x < len && data[x].is_ascii_digit() {
            x += 1;
        }
        if x == digits {
            return Err(x);
        }
    }
    if x < len && (data[x] == b'e' || data[x] == b'E') {
        x += 1;
        if x < len && (data[x] == b'+' || data[x] == b'-') {
            x += 1;
        }
        let digits = x;
        while x < len && data[x].is_ascii_digit() {
            x += 1;
        }
        if x == digits {
            return Err(x);
        }
    }
    Ok(x)
}

/// Find the closing quote of a string whose body begins at `start`.
pub(crate) fn find_ending_quote(data: &[u8], start: usize) -> Result<usize, DecodeError> {
    let mut i = start;
    while i < data.len() {
        match data[i] {
            b'\\' => i += 2,
            b'"' => return Ok(i),
            _ => i += 1,
        }
    }
    Err(DecodeError::UnexpectedEnd(data.len()))
}

/// Decode a JSON string body (between the quotes), resolving escapes.
///
/// `offset` is the position of the body in the whole input and is only used
/// for error reporting.
pub(crate) fn decode_json_string(bytes: &[u8], offset: usize) -> Result<String, DecodeError> {
    if let Some(i) = bytes.iter().position(|&b| b < 0x20) {
        return Err(DecodeError::InvalidString(offset + i));
    }
    if !bytes.contains(&b'\\') {
        return std::str::from_utf8(bytes)
            .map(str::to_owned)
            .map_err(|e| DecodeError::InvalidUtf8(offset + e.valid_up_to()));
    }
    // Re-wrap in quotes and let serde_json resolve escapes and surrogates.
    let mut quoted = Vec::with_capacity(bytes.len() + 2);
    quoted.push(b'"');
    quoted.extend_from_slice(bytes);
    quoted.push(b'"');
    serde_json::from_slice::<String>(&quoted).map_err(|_| DecodeError::InvalidString(offset))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(s: &str) -> Result<usize, usize> {
        scan_number(s.as_bytes(), 0)
    }

    #[test]
    fn scan_number_accepts_json_grammar() {
        for lit in ["0", "-0", "1", "42", "3.14", "-0.5", "1e10", "1E+2", "2.5e-3", "10"] {
            assert_eq!(scan(lit), Ok(lit.len()), "literal {lit}");
        }
    }

    #[test]
    fn scan_number_stops_at_first_non_number_byte() {
        assert_eq!(scan("12,"), Ok(2));
        assert_eq!(scan("01"), Ok(1));
        assert_eq!(scan("7]"), Ok(1));
    }

    #[test]
    fn scan_number_rejects_incomplete_literals() {
        assert_eq!(scan("-"), Err(1));
        assert_eq!(scan("1."), Err(2));
        assert_eq!(scan("1e"), Err(2));
        assert_eq!(scan("1e+"), Err(3));
        assert_eq!(scan(".5"), Err(0));
        assert_eq!(scan("+1"), Err(0));
    }

    #[test]
    fn find_ending_quote_skips_escapes() {
        assert_eq!(find_ending_quote(br#"a\"b"c"#, 0), Ok(4));
        assert_eq!(
            find_ending_quote(br#"abc"#, 0),
            Err(DecodeError::UnexpectedEnd(3))
        );
    }

    #[test]
    fn decode_json_string_handles_escapes() {
        assert_eq!(decode_json_string(b"plain", 0).unwrap(), "plain");
        assert_eq!(
            decode_json_string(r#"line\nbreak \"q\" \u00e9"#.as_bytes(), 0).unwrap(),
            "line\nbreak \"q\" \u{e9}"
        );
        assert_eq!(
            decode_json_string(r#"\ud83d\ude00"#.as_bytes(), 0).unwrap(),
            "\u{1F600}"
        );
    }

    #[test]
    fn decode_json_string_rejects_bad_input() {
        assert_eq!(
            decode_json_string(b"a\nb", 10),
            Err(DecodeError::InvalidString(11))
        );
        assert_eq!(
            decode_json_string(br#"\x"#, 4),
            Err(DecodeError::InvalidString(4))
        );
        assert_eq!(
            decode_json_string(&[b'a', 0xff], 2),
            Err(DecodeError::InvalidUtf8(3))
        );
    }
}
