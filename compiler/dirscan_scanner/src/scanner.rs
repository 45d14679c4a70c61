//! The directive scanner state machine
//!
//! The scanner pulls one byte at a time from a [`Cursor`]. Outside a
//! directive it only watches for a `#` that is the first non-blank byte on
//! its line. Inside one it collects bytes until a linefeed that is not part
//! of a backslash-linefeed continuation, then hands the finished
//! [`Directive`] to a [`DirectiveSink`].

use std::io::BufRead;

use dirscan_utils::span::Span;
use tracing::{debug, trace, warn};

use crate::{
    cursor::{is_blank, Cursor},
    ContinuationPolicy, Directive, DirectiveSink, EofPolicy, QuoteState, ScanError, ScanOptions,
    ScanWarning,
};

/// A directive that has been started but not yet emitted
#[derive(Debug)]
struct PendingDirective {
    /// Line of the `#`
    line: u32,
    /// Offset of the `#`
    start: usize,
    /// Bytes collected after the `#`
    text: Vec<u8>,
}

/// What a finished scan saw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanSummary {
    /// Number of lines in the input, 0 for empty input
    pub lines: u32,
    /// Number of directives handed to the sink
    pub directives: usize,
    /// Number of backslashes followed by blank space or end of input inside
    /// a directive, whatever the [`ContinuationPolicy`]
    pub malformed_continuations: usize,
    /// Did the input end inside a directive?
    pub unterminated: bool,
    /// Quote state at the end of input
    pub quotes: QuoteState,
}

/// Scans one byte stream for preprocessor directives.
///
/// A [`Scanner`] is consumed by [`Scanner::run`], so each instance processes
/// exactly one stream.
#[derive(Debug)]
pub struct Scanner<R> {
    /// Position in the input
    cursor: Cursor<R>,
    /// String and character literal state, updated on every byte
    quotes: QuoteState,
    /// The directive being collected, if any
    pending: Option<PendingDirective>,
    /// Policies for this scan
    options: ScanOptions,
    /// Directives emitted so far
    emitted: usize,
    /// Malformed continuations seen so far
    malformed: usize,
}

impl<R: BufRead> Scanner<R> {
    /// Create a new [`Scanner`] over `reader`
    #[must_use]
    pub const fn new(reader: R, options: ScanOptions) -> Self {
        Self {
            cursor: Cursor::new(reader),
            quotes: QuoteState::Unquoted,
            pending: None,
            options,
            emitted: 0,
            malformed: 0,
        }
    }

    /// Scan the whole stream, handing every directive to `sink`.
    ///
    /// # Errors
    /// Returns [`ScanError::Io`] if the reader fails, and
    /// [`ScanError::MalformedContinuation`] on the first malformed
    /// continuation under [`ContinuationPolicy::Strict`]. Directives emitted
    /// before the error stay with the sink.
    #[tracing::instrument(level = "debug", skip_all, fields(options = ?self.options))]
    pub fn run<S: DirectiveSink>(mut self, mut sink: S) -> Result<ScanSummary, ScanError> {
        while let Some(byte) = self.step()? {
            if self.pending.is_some() {
                self.collect(byte, &mut sink)?;
            } else {
                self.detect(byte);
            }
        }

        let unterminated = self.finish(&mut sink);
        let summary = ScanSummary {
            lines: self.cursor.lines_seen(),
            directives: self.emitted,
            malformed_continuations: self.malformed,
            unterminated,
            quotes: self.quotes,
        };
        debug!(?summary, "scan complete");
        Ok(summary)
    }

    /// Advance the cursor by one byte and update the quote state
    fn step(&mut self) -> Result<Option<u8>, ScanError> {
        let current = self.cursor.advance()?;
        self.quotes = self.quotes.update(self.cursor.prev(), current);
        Ok(current)
    }

    /// Outside a directive: start one on a `#` that begins its line
    fn detect(&mut self, byte: u8) {
        if byte != b'#' || !self.cursor.at_blank_prefix() {
            return;
        }
        if self.options.gate_quotes && self.quotes.is_quoted() {
            trace!(line = self.cursor.line(), quotes = ?self.quotes, "`#` inside quotes ignored");
            return;
        }

        trace!(line = self.cursor.line(), "directive started");
        self.pending = Some(PendingDirective {
            line: self.cursor.line(),
            start: self.cursor.offset(),
            text: Vec::new(),
        });
    }

    /// Inside a directive: collect `byte`, following continuations and
    /// emitting on the terminating linefeed
    fn collect<S: DirectiveSink>(&mut self, byte: u8, sink: &mut S) -> Result<(), ScanError> {
        match (byte, self.cursor.peek()) {
            (b'\\', Some(b'\n')) => {
                self.push(b'\\');
                self.step()?;
                self.push(b'\n');
                trace!(line = self.cursor.line(), "directive continued");
            }
            (b'\\', found) if is_malformed_follower(found) && !self.quotes.is_quoted() => {
                self.push(b'\\');
                self.malformed_continuation(found, sink)?;
            }
            (b'\n', _) => {
                self.push(b'\n');
                self.emit(sink, true);
                self.cursor.reset_blank_prefix();
            }
            _ => self.push(byte),
        }
        Ok(())
    }

    /// Append a byte to the pending directive
    fn push(&mut self, byte: u8) {
        if let Some(pending) = self.pending.as_mut() {
            pending.text.push(byte);
        }
    }

    /// Apply the [`ContinuationPolicy`] to the backslash under the cursor
    fn malformed_continuation<S: DirectiveSink>(
        &mut self,
        found: Option<u8>,
        sink: &mut S,
    ) -> Result<(), ScanError> {
        self.malformed += 1;
        let line = self.cursor.line();
        let span = Span::from_positions(self.cursor.offset(), self.cursor.end_offset());

        match self.options.continuations {
            ContinuationPolicy::Lenient => {
                trace!(line, ?found, "malformed continuation kept as text");
            }
            ContinuationPolicy::Warn => {
                warn!(line, ?found, "backslash does not continue the directive");
                sink.warn(ScanWarning::MalformedContinuation { line, span, found });
            }
            ContinuationPolicy::Strict => {
                return Err(ScanError::MalformedContinuation { line, span, found });
            }
        }
        Ok(())
    }

    /// Hand the pending directive to the sink
    fn emit<S: DirectiveSink>(&mut self, sink: &mut S, terminated: bool) {
        let Some(pending) = self.pending.take() else {
            return;
        };

        let directive = Directive {
            line: pending.line,
            end_line: self.cursor.line(),
            span: Span::from_positions(pending.start, self.cursor.end_offset()),
            text: pending.text,
            terminated,
        };
        debug!(
            line = directive.line,
            end_line = directive.end_line,
            len = directive.text.len(),
            terminated,
            "directive emitted"
        );
        self.emitted += 1;
        sink.emit(directive);
    }

    /// Deal with a directive left open at end of input. Returns whether there
    /// was one.
    fn finish<S: DirectiveSink>(&mut self, sink: &mut S) -> bool {
        let Some(pending) = &self.pending else {
            return false;
        };

        let line = pending.line;
        let span = Span::from_positions(pending.start, self.cursor.end_offset());
        warn!(line, on_eof = ?self.options.on_eof, "input ended inside a directive");
        sink.warn(ScanWarning::UnterminatedDirective { line, span });

        match self.options.on_eof {
            EofPolicy::Flush => self.emit(sink, false),
            EofPolicy::Discard => self.pending = None,
        }
        true
    }
}

/// Does a backslash followed by `found` look like a broken continuation?
const fn is_malformed_follower(found: Option<u8>) -> bool {
    match found {
        Some(byte) => is_blank(byte),
        None => true,
    }
}
