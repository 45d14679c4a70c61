//! The records produced by the scanner

use std::borrow::Cow;

use dirscan_utils::{
    span::Span,
    string_utils::{find_word, is_identifier_byte},
};

/// One preprocessor directive, as found in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    /// 1-based line of the introducing `#`
    pub line: u32,
    /// 1-based line the directive ends on. Differs from `line` only when
    /// the directive is continued onto further lines.
    pub end_line: u32,
    /// Bytes from the `#` up to and including the terminating linefeed, or
    /// up to the end of input for an unterminated directive
    pub span: Span,
    /// Everything after the `#`: continuation backslashes and their
    /// linefeeds are kept, as is the terminating linefeed
    pub text: Vec<u8>,
    /// False only for a directive cut off by the end of input
    pub terminated: bool,
}

impl Directive {
    /// The directive's name, such as `define` in `#  define X 1`.
    ///
    /// Returns [`None`] for a null directive (a lone `#`) or when the `#` is
    /// followed by something that is not an identifier.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        let mut rest = self.text.as_slice();
        loop {
            match rest {
                [b' ' | b'\t', tail @ ..] | [b'\\', b'\n', tail @ ..] => rest = tail,
                _ => break,
            }
        }

        let len = rest
            .iter()
            .position(|&byte| !is_identifier_byte(byte))
            .unwrap_or(rest.len());
        if len == 0 {
            return None;
        }
        std::str::from_utf8(&rest[..len]).ok()
    }

    /// The text with every backslash-linefeed pair removed, joining the
    /// physical lines into one logical line.
    #[must_use]
    pub fn logical_text(&self) -> Cow<'_, [u8]> {
        if !self.text.windows(2).any(|pair| pair == b"\\\n") {
            return Cow::Borrowed(&self.text);
        }

        let mut joined = Vec::with_capacity(self.text.len());
        let mut bytes = self.text.iter().copied().peekable();
        while let Some(byte) = bytes.next() {
            if byte == b'\\' && bytes.peek() == Some(&b'\n') {
                bytes.next();
                continue;
            }
            joined.push(byte);
        }
        Cow::Owned(joined)
    }

    /// Does the logical text mention `identifier` as a whole word?
    #[must_use]
    pub fn mentions(&self, identifier: &str) -> bool {
        find_word(&self.logical_text(), identifier.as_bytes()).is_some()
    }

    /// Render the directive back into source form, appending a linefeed when
    /// the text was cut off without one.
    #[must_use]
    pub fn source(&self) -> Vec<u8> {
        let mut source = Vec::with_capacity(self.text.len() + 2);
        source.push(b'#');
        source.extend_from_slice(&self.text);
        if source.last() != Some(&b'\n') {
            source.push(b'\n');
        }
        source
    }
}
