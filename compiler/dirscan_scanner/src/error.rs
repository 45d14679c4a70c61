//! Errors that stop a scan and warnings that do not

use std::io;

use dirscan_diagnostics::{Diagnostic, DiagnosticKind, SpanExt};
use dirscan_utils::span::Span;
use thiserror::Error;

/// Describe the byte found after a stray backslash, for messages
#[must_use]
pub const fn describe_byte(found: Option<u8>) -> &'static str {
    match found {
        None => "end of input",
        Some(b' ') => "a space",
        Some(b'\t') => "a tab",
        Some(b'\r') => "a carriage return",
        Some(_) => "an unexpected byte",
    }
}

/// A reason the scan was aborted
#[derive(Debug, Error)]
pub enum ScanError {
    /// The byte source failed
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),
    /// A backslash inside a directive was followed by blank space or the end
    /// of input, under [`ContinuationPolicy::Strict`].
    ///
    /// [`ContinuationPolicy::Strict`]: crate::ContinuationPolicy::Strict
    #[error(
        "line {line}: backslash followed by {} does not continue the directive",
        describe_byte(*found)
    )]
    MalformedContinuation {
        /// Line of the backslash
        line: u32,
        /// The backslash itself
        span: Span,
        /// What followed the backslash, [`None`] for end of input
        found: Option<u8>,
    },
}

impl ScanError {
    /// Convert into an error [`Diagnostic`], when the error has a location in
    /// the input
    #[must_use]
    pub fn to_diagnostic(&self) -> Option<Diagnostic> {
        match self {
            Self::Io(_) => None,
            Self::MalformedContinuation { span, found, .. } => Some(span.error(
                DiagnosticKind::MalformedContinuation(describe_byte(*found).to_string()),
            )),
        }
    }
}

/// Something suspicious the scanner noticed without stopping
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanWarning {
    /// A backslash inside a directive was followed by blank space or the end
    /// of input, under [`ContinuationPolicy::Warn`].
    ///
    /// [`ContinuationPolicy::Warn`]: crate::ContinuationPolicy::Warn
    #[error(
        "line {line}: backslash followed by {} does not continue the directive",
        describe_byte(*found)
    )]
    MalformedContinuation {
        /// Line of the backslash
        line: u32,
        /// The backslash itself
        span: Span,
        /// What followed the backslash, [`None`] for end of input
        found: Option<u8>,
    },
    /// The input ended inside a directive
    #[error("line {line}: directive is not terminated by a linefeed before the end of input")]
    UnterminatedDirective {
        /// Line of the directive's `#`
        line: u32,
        /// From the `#` to the end of input
        span: Span,
    },
}

impl ScanWarning {
    /// Line the warning points at
    #[must_use]
    pub const fn line(&self) -> u32 {
        match self {
            Self::MalformedContinuation { line, .. } | Self::UnterminatedDirective { line, .. } => {
                *line
            }
        }
    }

    /// Convert into a warning [`Diagnostic`]
    #[must_use]
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            Self::MalformedContinuation { span, found, .. } => span.warning(
                DiagnosticKind::MalformedContinuation(describe_byte(*found).to_string()),
            ),
            Self::UnterminatedDirective { span, .. } => {
                span.warning(DiagnosticKind::UnterminatedDirective)
            }
        }
    }
}
