//! Byte-string helpers shared by the scanner and its reports

use std::fmt::Write;

/// Renders a byte string as a double-quoted, escaped literal.
///
/// Printable ASCII is kept as-is, `"` and `\` are backslash-escaped, and
/// everything else uses the usual `\n`, `\t`, `\r` or `\xNN` escapes. The
/// result is always valid UTF-8 and always fits on one line, which makes it
/// suitable for one-directive-per-line reports.
///
/// # Examples
/// ```
/// use dirscan_utils::string_utils::escape_bytes;
///
/// assert_eq!(escape_bytes(b"define X 1\n"), r#""define X 1\n""#);
/// assert_eq!(escape_bytes(b"a\"b"), r#""a\"b""#);
/// assert_eq!(escape_bytes(&[0xff]), r#""\xff""#);
/// ```
#[must_use]
pub fn escape_bytes(input: &[u8]) -> String {
    let mut output = String::with_capacity(input.len() + 2);
    output.push('"');
    for &byte in input {
        match byte {
            b'\n' => output.push_str("\\n"),
            b'\t' => output.push_str("\\t"),
            b'\r' => output.push_str("\\r"),
            b'"' => output.push_str("\\\""),
            b'\\' => output.push_str("\\\\"),
            0x20..=0x7e => output.push(char::from(byte)),
            _ => write!(output, "\\x{byte:02x}").expect("writing to a string should succeed"),
        }
    }
    output.push('"');
    output
}

/// Can this byte appear inside a C identifier?
#[must_use]
#[inline]
pub const fn is_identifier_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}

/// Checks if a string is a valid C identifier.
///
/// A valid identifier must:
/// - Start with a letter (a-z, A-Z) or underscore (_)
/// - Contain only letters, digits (0-9), or underscores
/// - Not be empty
///
/// # Examples
/// ```
/// use dirscan_utils::string_utils::is_valid_identifier;
///
/// assert!(is_valid_identifier("OLD_MACRO"));
/// assert!(is_valid_identifier("_private"));
/// assert!(!is_valid_identifier("123invalid"));
/// assert!(!is_valid_identifier(""));
/// ```
#[must_use]
pub fn is_valid_identifier(input: &str) -> bool {
    let mut bytes = input.bytes();
    let Some(first) = bytes.next() else {
        return false;
    };

    (first.is_ascii_alphabetic() || first == b'_') && bytes.all(is_identifier_byte)
}

/// Finds the first whole-word occurrence of `word` in `haystack`.
///
/// An occurrence only counts when it is not glued to other identifier bytes
/// on either side, so `FOO` is found in `#ifdef FOO` and `x(FOO)` but not in
/// `FOOBAR` or `MY_FOO`. Returns the byte offset of the match.
///
/// # Examples
/// ```
/// use dirscan_utils::string_utils::find_word;
///
/// assert_eq!(find_word(b"ifdef FOO\n", b"FOO"), Some(6));
/// assert_eq!(find_word(b"define FOOBAR 1", b"FOO"), None);
/// ```
#[must_use]
pub fn find_word(haystack: &[u8], word: &[u8]) -> Option<usize> {
    if word.is_empty() || word.len() > haystack.len() {
        return None;
    }

    haystack
        .windows(word.len())
        .enumerate()
        .find(|&(start, window)| {
            let end = start + word.len();
            window == word
                && (start == 0 || !is_identifier_byte(haystack[start - 1]))
                && haystack.get(end).map_or(true, |&next| !is_identifier_byte(next))
        })
        .map(|(start, _)| start)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_bytes_quotes_and_escapes() {
        assert_eq!(escape_bytes(b""), "\"\"");
        assert_eq!(escape_bytes(b"define X \\\n1\n"), r#""define X \\\n1\n""#);
        assert_eq!(escape_bytes(b"\tpragma once\r\n"), r#""\tpragma once\r\n""#);
        assert_eq!(escape_bytes(&[0x00, 0x7f, 0xc3]), r#""\x00\x7f\xc3""#);
    }

    #[test]
    fn test_is_valid_identifier() {
        assert!(is_valid_identifier("valid_name"));
        assert!(is_valid_identifier("_"));
        assert!(is_valid_identifier("HAVE_CONFIG_H"));
        assert!(is_valid_identifier("name123"));

        assert!(!is_valid_identifier("123invalid"));
        assert!(!is_valid_identifier(""));
        assert!(!is_valid_identifier("invalid-name"));
        assert!(!is_valid_identifier("invalid name"));
    }

    #[test]
    fn find_word_respects_identifier_boundaries() {
        assert_eq!(find_word(b"FOO", b"FOO"), Some(0));
        assert_eq!(find_word(b"if defined(FOO) && BAR", b"FOO"), Some(11));
        assert_eq!(find_word(b"MY_FOO FOO", b"FOO"), Some(7));
        assert_eq!(find_word(b"FOO_BAR", b"FOO"), None);
        assert_eq!(find_word(b"FO", b"FOO"), None);
        assert_eq!(find_word(b"anything", b""), None);
    }
}
