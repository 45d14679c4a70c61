//! Defines the [`Diagnostic`] type and its [`Severity`].

use std::error::Error;

use ansi_term::{Color, Style};
use derive_more::Display;
use dirscan_utils::span::Spanned;

use crate::{fmt::display_source_window, DiagnosticKind};

/// The severity of a [`Diagnostic`].
#[derive(Clone, Copy, PartialEq, Eq, Debug, Display)]
pub enum Severity {
    /// Error. The scan of this input was aborted.
    #[display("error")]
    Error,
    /// Warning. The scan continued, but the input looks suspicious.
    #[display("warning")]
    Warning,
    /// Informational, used to report directives themselves.
    #[display("note")]
    Note,
}

impl Severity {
    /// The terminal style this severity is painted with
    #[must_use]
    pub fn style(self) -> Style {
        match self {
            Self::Error => Color::Red.bold(),
            Self::Warning => Color::Yellow.bold(),
            Self::Note => Color::Cyan.bold(),
        }
    }
}

/// A diagnostic message produced by dirscan
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display("{_0}: {_1}")]
pub struct Diagnostic(pub Severity, pub Spanned<DiagnosticKind>);

impl Diagnostic {
    /// The 1-indexed line the diagnostic starts on, if `source` is available
    fn line_in(&self, source: &str) -> usize {
        let start = self.1.span().start().min(source.len());
        source.as_bytes()[..start]
            .iter()
            .filter(|&&byte| byte == b'\n')
            .count()
            + 1
    }

    /// Convert this [`Diagnostic`] to a printable string.
    ///
    /// With the source text available the output points at the file and line
    /// and includes a source window underlining the span. Without it, only the
    /// header line is produced.
    #[must_use]
    pub fn print(&self, file_name: &str, source: Option<&str>) -> String {
        let header = format!(
            "{}: {}",
            self.0.style().paint(self.0.to_string()),
            Style::new().bold().paint(self.1.value().to_string())
        );

        let Some(source) = source else {
            return format!("{header}\n {} {file_name}", Color::Blue.bold().paint("-->"));
        };

        let window = display_source_window(self.0, self.1.span(), source);
        let location = format!(
            " {} {file_name}:{}",
            Color::Blue.bold().paint("-->"),
            self.line_in(source)
        );

        if window.is_empty() {
            format!("{header}\n{location}")
        } else {
            format!("{header}\n{location}\n{window}")
        }
    }

    /// Like [`Diagnostic::print`] without a source window, for callers that
    /// streamed the input and only know the line.
    #[must_use]
    pub fn print_at(&self, file_name: &str, line: u32) -> String {
        format!(
            "{}: {}\n {} {file_name}:{line}",
            self.0.style().paint(self.0.to_string()),
            Style::new().bold().paint(self.1.value().to_string()),
            Color::Blue.bold().paint("-->"),
        )
    }
}

impl Error for Diagnostic {}

#[cfg(test)]
mod tests {
    use dirscan_utils::spanned;

    use super::*;

    #[test]
    fn severity_display_works_correctly() {
        assert_eq!(Severity::Error.to_string(), "error");
        assert_eq!(Severity::Warning.to_string(), "warning");
        assert_eq!(Severity::Note.to_string(), "note");
    }

    #[test]
    fn severity_styles_differ() {
        assert_eq!(Severity::Error.style(), Color::Red.bold());
        assert_eq!(Severity::Warning.style(), Color::Yellow.bold());
        assert_ne!(Severity::Note.style(), Severity::Warning.style());
    }

    #[test]
    fn diagnostic_display_includes_severity_and_kind() {
        let diagnostic = Diagnostic(
            Severity::Warning,
            spanned!(0, DiagnosticKind::UnterminatedDirective, 4),
        );
        assert_eq!(
            diagnostic.to_string(),
            "warning: directive is not terminated by a linefeed before the end of input"
        );
    }

    #[test]
    fn print_without_source_names_the_file() {
        let diagnostic = Diagnostic(
            Severity::Note,
            spanned!(0, DiagnosticKind::Directive("include".to_string()), 9),
        );
        let output = diagnostic.print("main.c", None);

        assert!(output.contains("`#include` directive"));
        assert!(output.contains("main.c"));
    }

    #[test]
    fn print_at_names_the_file_and_line() {
        let diagnostic = Diagnostic(
            Severity::Warning,
            spanned!(120, DiagnosticKind::UnterminatedDirective, 126),
        );
        let output = diagnostic.print_at("big.h", 14);

        assert!(output.contains("directive is not terminated"));
        assert!(output.ends_with("big.h:14"));
        assert_eq!(output.lines().count(), 2);
    }

    #[test]
    fn print_with_source_points_at_the_line() {
        let source = "int x;\n\n#define OLD 1\n";
        let diagnostic = Diagnostic(
            Severity::Warning,
            spanned!(8, DiagnosticKind::ObsoleteIdentifier("OLD".to_string()), 22),
        );
        let output = diagnostic.print("config.h", Some(source));

        assert!(output.contains("config.h:3"));
        assert!(output.contains("#define OLD 1"));
        assert!(output.contains("^^^^^^^^^^^^^"));
        assert!(!output.contains("int x;"));
    }
}
