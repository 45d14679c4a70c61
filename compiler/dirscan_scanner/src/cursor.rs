//! Byte cursor over a buffered reader
//!
//! The [`Cursor`] keeps a fixed window of four byte slots around the current
//! position: two bytes of history, the current byte and one byte of
//! lookahead. [`None`] in a slot is the stream boundary, before the first byte
//! or after the last, and is distinct from every byte value.
//!
//! Along with the window the cursor tracks the 1-based line of the current
//! byte, its byte offset and whether the current physical line has only seen
//! blank bytes so far.

use std::io::{self, BufRead};

/// Slot of the byte before the previous byte
const PREV2: usize = 0;
/// Slot of the previous byte
const PREV: usize = 1;
/// Slot of the current byte
const CURRENT: usize = 2;
/// Slot of the lookahead byte
const NEXT: usize = 3;

/// Is this one of the blank bytes allowed before a `#` on its line?
///
/// Only space, tab and carriage return count. Linefeed is handled separately
/// because it starts a new line instead of extending the blank prefix.
#[must_use]
#[inline]
pub const fn is_blank(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\r')
}

/// A four-slot sliding window over a byte stream
#[derive(Debug)]
pub struct Cursor<R> {
    /// The byte source
    reader: R,
    /// `[previous-previous, previous, current, lookahead]`
    window: [Option<u8>; 4],
    /// Has the lookahead slot been filled for the first time?
    primed: bool,
    /// Has the reader reported end of stream?
    exhausted: bool,
    /// 1-based line of the current byte
    line: u32,
    /// Number of bytes that have been the current byte so far
    consumed: usize,
    /// Has every byte on the current line before the current byte been blank?
    blank_prefix: bool,
}

impl<R: BufRead> Cursor<R> {
    /// Create a new [`Cursor`] positioned before the first byte of `reader`.
    ///
    /// Nothing is read until the first [`Cursor::advance`].
    #[must_use]
    pub const fn new(reader: R) -> Self {
        Self {
            reader,
            window: [None; 4],
            primed: false,
            exhausted: false,
            line: 1,
            consumed: 0,
            blank_prefix: true,
        }
    }

    /// Pull one byte from the reader. Never touches the reader again once it
    /// has reported end of stream.
    fn read_byte(&mut self) -> Result<Option<u8>, io::Error> {
        if self.exhausted {
            return Ok(None);
        }

        loop {
            let next = match self.reader.fill_buf() {
                Ok(buf) => buf.first().copied(),
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => return Err(err),
            };

            if next.is_some() {
                self.reader.consume(1);
            } else {
                self.exhausted = true;
            }
            return Ok(next);
        }
    }

    /// Shift the window by exactly one byte and return the new current byte.
    ///
    /// Returns `Ok(None)` once the end of the stream has become current. The
    /// window is left untouched if the reader fails.
    ///
    /// # Errors
    /// Propagates any I/O error other than [`io::ErrorKind::Interrupted`],
    /// which is retried.
    pub fn advance(&mut self) -> Result<Option<u8>, io::Error> {
        if !self.primed {
            self.window[NEXT] = self.read_byte()?;
            self.primed = true;
        }

        let fresh = if self.window[NEXT].is_some() {
            self.read_byte()?
        } else {
            None
        };
        self.window.rotate_left(1);
        self.window[NEXT] = fresh;

        if self.current().is_some() {
            self.consumed += 1;
            if self.prev() == Some(b'\n') {
                self.line = self.line.saturating_add(1);
            }
        }

        match self.prev() {
            Some(b'\n') => self.blank_prefix = true,
            Some(byte) if !is_blank(byte) => self.blank_prefix = false,
            Some(_) | None => {}
        }

        Ok(self.current())
    }

    /// The byte before the previous byte
    #[must_use]
    #[inline]
    pub const fn prev2(&self) -> Option<u8> {
        self.window[PREV2]
    }

    /// The byte before the current byte
    #[must_use]
    #[inline]
    pub const fn prev(&self) -> Option<u8> {
        self.window[PREV]
    }

    /// The current byte, [`None`] before the first advance and at end of
    /// stream
    #[must_use]
    #[inline]
    pub const fn current(&self) -> Option<u8> {
        self.window[CURRENT]
    }

    /// The byte after the current byte
    #[must_use]
    #[inline]
    pub const fn peek(&self) -> Option<u8> {
        self.window[NEXT]
    }

    /// The 1-based line the current byte is on. Stops counting at
    /// [`u32::MAX`].
    #[must_use]
    #[inline]
    pub const fn line(&self) -> u32 {
        self.line
    }

    /// Number of lines the stream has touched so far, 0 for an empty stream
    #[must_use]
    pub const fn lines_seen(&self) -> u32 {
        if self.consumed == 0 {
            0
        } else {
            self.line
        }
    }

    /// Byte offset of the current byte
    ///
    /// At end of stream this is the length of the stream.
    #[must_use]
    pub const fn offset(&self) -> usize {
        if self.current().is_some() {
            self.consumed - 1
        } else {
            self.consumed
        }
    }

    /// Byte offset just past the current byte
    #[must_use]
    #[inline]
    pub const fn end_offset(&self) -> usize {
        self.consumed
    }

    /// Has every byte before the current one on this line been blank?
    #[must_use]
    #[inline]
    pub const fn at_blank_prefix(&self) -> bool {
        self.blank_prefix
    }

    /// Force the blank-prefix flag back on, as if a new line had started
    #[inline]
    pub fn reset_blank_prefix(&mut self) {
        self.blank_prefix = true;
    }

    /// Has the end of the stream become the current byte?
    #[must_use]
    #[inline]
    pub const fn is_eof(&self) -> bool {
        self.primed && self.current().is_none()
    }
}

#[cfg(test)]
mod tests {
    use std::io::{BufReader, Read};

    use super::*;

    /// Advance through the whole input, collecting the window after each step
    fn windows(input: &[u8]) -> Vec<[Option<u8>; 4]> {
        let mut cursor = Cursor::new(input);
        let mut seen = Vec::new();
        while cursor.advance().expect("reading a slice should succeed").is_some() {
            seen.push([cursor.prev2(), cursor.prev(), cursor.current(), cursor.peek()]);
        }
        seen
    }

    #[test]
    fn window_shifts_one_byte_at_a_time() {
        assert_eq!(
            windows(b"abc"),
            vec![
                [None, None, Some(b'a'), Some(b'b')],
                [None, Some(b'a'), Some(b'b'), Some(b'c')],
                [Some(b'a'), Some(b'b'), Some(b'c'), None],
            ]
        );
    }

    #[test]
    fn empty_input_is_immediately_eof() {
        let mut cursor = Cursor::new(&b""[..]);
        assert!(!cursor.is_eof());
        assert_eq!(cursor.advance().expect("should succeed"), None);
        assert!(cursor.is_eof());
        assert_eq!(cursor.lines_seen(), 0);
        assert_eq!(cursor.offset(), 0);
    }

    #[test]
    fn advancing_past_eof_stays_at_eof() {
        let mut cursor = Cursor::new(&b"x"[..]);
        assert_eq!(cursor.advance().expect("should succeed"), Some(b'x'));
        assert_eq!(cursor.advance().expect("should succeed"), None);
        assert_eq!(cursor.prev(), Some(b'x'));
        assert_eq!(cursor.advance().expect("should succeed"), None);
        assert_eq!(cursor.prev(), None);
        assert_eq!(cursor.offset(), 1);
    }

    #[test]
    fn linefeed_belongs_to_the_line_it_terminates() {
        let mut cursor = Cursor::new(&b"a\nb\n"[..]);
        let mut lines = Vec::new();
        while let Some(byte) = cursor.advance().expect("should succeed") {
            lines.push((byte, cursor.line()));
        }
        assert_eq!(
            lines,
            vec![(b'a', 1), (b'\n', 1), (b'b', 2), (b'\n', 2)]
        );
        assert_eq!(cursor.lines_seen(), 2);
    }

    #[test]
    fn line_counter_saturates() {
        let mut cursor = Cursor::new(&b"a\nb\nc\n"[..]);
        cursor.line = u32::MAX - 1;
        let mut lines = Vec::new();
        while cursor.advance().expect("should succeed").is_some() {
            lines.push(cursor.line());
        }
        assert_eq!(
            lines,
            vec![u32::MAX - 1, u32::MAX - 1, u32::MAX, u32::MAX, u32::MAX, u32::MAX]
        );
    }

    #[test]
    fn offsets_track_the_current_byte() {
        let mut cursor = Cursor::new(&b"ab"[..]);
        cursor.advance().expect("should succeed");
        assert_eq!((cursor.offset(), cursor.end_offset()), (0, 1));
        cursor.advance().expect("should succeed");
        assert_eq!((cursor.offset(), cursor.end_offset()), (1, 2));
        cursor.advance().expect("should succeed");
        assert_eq!((cursor.offset(), cursor.end_offset()), (2, 2));
    }

    #[test]
    fn blank_prefix_is_sticky_until_linefeed() {
        let mut cursor = Cursor::new(&b" \tx #\n #"[..]);
        let mut flags = Vec::new();
        while let Some(byte) = cursor.advance().expect("should succeed") {
            flags.push((byte, cursor.at_blank_prefix()));
        }
        assert_eq!(
            flags,
            vec![
                (b' ', true),
                (b'\t', true),
                (b'x', true),
                (b' ', false),
                (b'#', false),
                (b'\n', false),
                (b' ', true),
                (b'#', true),
            ]
        );
    }

    #[test]
    fn carriage_returns_are_blank() {
        assert!(is_blank(b'\r'));
        assert!(is_blank(b' '));
        assert!(!is_blank(b'\n'));
        assert!(!is_blank(b'#'));
    }

    /// A reader that is interrupted before every successful read
    struct Flaky<'a> {
        /// Remaining bytes
        inner: &'a [u8],
        /// Whether the next read should be interrupted
        interrupt: bool,
    }

    impl Read for Flaky<'_> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            self.interrupt = !self.interrupt;
            if self.interrupt {
                return Err(io::Error::from(io::ErrorKind::Interrupted));
            }
            self.inner.read(buf)
        }
    }

    #[test]
    fn interrupted_reads_are_retried() {
        let reader = BufReader::with_capacity(
            1,
            Flaky {
                inner: b"#x\n",
                interrupt: false,
            },
        );
        let mut cursor = Cursor::new(reader);
        let mut bytes = Vec::new();
        while let Some(byte) = cursor.advance().expect("interruptions should be retried") {
            bytes.push(byte);
        }
        assert_eq!(bytes, b"#x\n");
    }

    /// A reader that fails after yielding its bytes
    struct Broken(Option<u8>);

    impl Read for Broken {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            match self.0.take() {
                Some(byte) => {
                    buf[0] = byte;
                    Ok(1)
                }
                None => Err(io::Error::new(io::ErrorKind::Other, "device on fire")),
            }
        }
    }

    #[test]
    fn read_errors_propagate() {
        let mut cursor = Cursor::new(BufReader::with_capacity(1, Broken(Some(b'#'))));
        let err = cursor.advance().expect_err("the lookahead read should fail");
        assert_eq!(err.to_string(), "device on fire");
    }
}
