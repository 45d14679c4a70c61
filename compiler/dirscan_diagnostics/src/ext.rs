//! Extension types for dirscan diagnostics

use dirscan_utils::span::{Span, Spannable};

use crate::{Diagnostic, DiagnosticKind, Severity};

/// A trait to easily create [`Diagnostic`]s from [`Span`]s
/// See also: [`Spannable`]
pub trait SpanExt {
    /// Create an error [`Diagnostic`] from this [`Span`] and a
    /// [`DiagnosticKind`]
    #[must_use]
    fn error(self, kind: DiagnosticKind) -> Diagnostic;

    /// Create a warning [`Diagnostic`] from this [`Span`] and a
    /// [`DiagnosticKind`]
    #[must_use]
    fn warning(self, kind: DiagnosticKind) -> Diagnostic;

    /// Create a note [`Diagnostic`] from this [`Span`] and a
    /// [`DiagnosticKind`]
    #[must_use]
    fn note(self, kind: DiagnosticKind) -> Diagnostic;
}
impl SpanExt for Span {
    #[inline]
    fn error(self, kind: DiagnosticKind) -> Diagnostic {
        Diagnostic(Severity::Error, kind.in_span(self))
    }

    #[inline]
    fn warning(self, kind: DiagnosticKind) -> Diagnostic {
        Diagnostic(Severity::Warning, kind.in_span(self))
    }

    #[inline]
    fn note(self, kind: DiagnosticKind) -> Diagnostic {
        Diagnostic(Severity::Note, kind.in_span(self))
    }
}
