//! Rendering scan reports for humans and for other tools

use std::fmt::Write;

use dirscan_diagnostics::{DiagnosticKind, SpanExt};
use dirscan_scanner::{Directive, ScanWarning};
use dirscan_utils::string_utils::escape_bytes;

use crate::runner::{Finding, ScanReport};

/// How a [`ScanReport`] is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// One `file:line: "text"` line per directive
    #[default]
    Plain,
    /// The directives re-emitted as source code
    Source,
    /// Colored diagnostics with a source window
    Pretty,
}

/// `3`, or `3-5` for a directive continued onto lines 4 and 5
fn line_range(directive: &Directive) -> String {
    if directive.end_line == directive.line {
        directive.line.to_string()
    } else {
        format!("{}-{}", directive.line, directive.end_line)
    }
}

/// One line of the plain format, without the trailing linefeed
fn plain_line(file_name: &str, finding: &Finding) -> String {
    let mut line = format!(
        "{file_name}:{}: {}",
        line_range(&finding.directive),
        escape_bytes(&finding.directive.text)
    );
    if !finding.matched.is_empty() {
        write!(line, " (mentions `{}`)", finding.matched.join("`, `"))
            .expect("writing to a string should succeed");
    }
    line
}

/// The pretty diagnostics for one finding
fn pretty_finding(file_name: &str, source: &str, finding: &Finding) -> String {
    let span = finding.directive.span;
    if finding.matched.is_empty() {
        let name = finding.directive.name().unwrap_or_default().to_string();
        return span
            .note(DiagnosticKind::Directive(name))
            .print(file_name, Some(source));
    }

    finding
        .matched
        .iter()
        .map(|identifier| {
            span.warning(DiagnosticKind::ObsoleteIdentifier(identifier.clone()))
                .print(file_name, Some(source))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render the findings of `report` in the given [`Format`].
///
/// `source` is the complete scanned input, if it was kept. Only the pretty
/// format uses it, and falls back to the plain format when it is missing or
/// not UTF-8.
#[must_use]
pub fn render(
    format: Format,
    file_name: &str,
    source: Option<&[u8]>,
    report: &ScanReport,
) -> Vec<u8> {
    match format {
        Format::Source => report
            .findings
            .iter()
            .flat_map(|finding| finding.directive.source())
            .collect(),
        Format::Pretty => match source.and_then(|source| std::str::from_utf8(source).ok()) {
            Some(source) => report
                .findings
                .iter()
                .map(|finding| pretty_finding(file_name, source, finding) + "\n")
                .collect::<String>()
                .into_bytes(),
            None => render(Format::Plain, file_name, None, report),
        },
        Format::Plain => report
            .findings
            .iter()
            .map(|finding| plain_line(file_name, finding) + "\n")
            .collect::<String>()
            .into_bytes(),
    }
}

/// Render scanner warnings as diagnostics, one after the other.
///
/// Source windows are only shown when `source` is available and UTF-8.
/// Returns an empty string when there are no warnings.
#[must_use]
pub fn render_warnings(file_name: &str, source: Option<&[u8]>, warnings: &[ScanWarning]) -> String {
    let source = source.and_then(|source| std::str::from_utf8(source).ok());
    warnings
        .iter()
        .map(|warning| {
            let diagnostic = warning.to_diagnostic();
            match source {
                Some(source) => diagnostic.print(file_name, Some(source)),
                None => diagnostic.print_at(file_name, warning.line()),
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
