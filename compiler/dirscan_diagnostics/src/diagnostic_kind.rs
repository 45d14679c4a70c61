//! Defines everything dirscan can tell the user about a scanned input.

use dirscan_utils::span::{Span, Spannable};
use thiserror::Error;

use crate::{Diagnostic, Severity};

/// The list of possible diagnostics
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticKind {
    // SCANNER
    /// A backslash inside a directive is followed by blank space or the end
    /// of input instead of a linefeed. Parameter describes what followed it.
    #[error("backslash followed by {0} does not continue the directive")]
    MalformedContinuation(String),
    /// The input ended before the directive's terminating linefeed.
    #[error("directive is not terminated by a linefeed before the end of input")]
    UnterminatedDirective,

    // REPORTS
    /// A directive reported by the driver. Parameter is the directive name,
    /// empty for a null directive.
    #[error("`#{0}` directive")]
    Directive(String),
    /// A directive mentions an identifier the user asked to hunt down.
    #[error("directive mentions obsolete identifier `{0}`")]
    ObsoleteIdentifier(String),
}
impl DiagnosticKind {
    /// Create an [error] diagnostic in a given [`Span`]
    ///
    /// [error]: [`Severity::Error`]
    #[must_use]
    #[inline]
    pub fn error_in(self, span: Span) -> Diagnostic {
        Diagnostic(Severity::Error, self.in_span(span))
    }

    /// Create a [warning] diagnostic in a given [`Span`]
    ///
    /// [warning]: [`Severity::Warning`]
    #[must_use]
    #[inline]
    pub fn warning_in(self, span: Span) -> Diagnostic {
        Diagnostic(Severity::Warning, self.in_span(span))
    }

    /// Create a [note] diagnostic in a given [`Span`]
    ///
    /// [note]: [`Severity::Note`]
    #[must_use]
    #[inline]
    pub fn note_in(self, span: Span) -> Diagnostic {
        Diagnostic(Severity::Note, self.in_span(span))
    }
}
