//! Runs the scanner over one input and keeps the directives the user asked
//! for

use std::io::BufRead;

use dirscan_scanner::{
    Directive, DirectiveSink, ScanError, ScanOptions, ScanSummary, ScanWarning, Scanner,
};
use tracing::debug;

/// Which directives make it into the report
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    /// Only keep directives with one of these names. Empty keeps every name.
    pub directives: Vec<String>,
    /// Only keep directives mentioning one of these identifiers. Empty keeps
    /// every directive.
    pub obsolete: Vec<String>,
}

impl Filter {
    /// Check a directive against the filter.
    ///
    /// Returns [`None`] if the directive is filtered out, otherwise the
    /// obsolete identifiers it mentions (empty when no identifiers were
    /// requested).
    #[must_use]
    pub fn matches(&self, directive: &Directive) -> Option<Vec<String>> {
        if !self.directives.is_empty() {
            let name = directive.name()?;
            if !self.directives.iter().any(|wanted| wanted == name) {
                return None;
            }
        }

        if self.obsolete.is_empty() {
            return Some(Vec::new());
        }

        let matched: Vec<String> = self
            .obsolete
            .iter()
            .filter(|identifier| directive.mentions(identifier))
            .cloned()
            .collect();
        (!matched.is_empty()).then_some(matched)
    }
}

/// A directive that passed the [`Filter`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    /// The directive itself
    pub directive: Directive,
    /// Obsolete identifiers it mentions
    pub matched: Vec<String>,
}

/// Everything one scan produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanReport {
    /// Directives that passed the filter, in input order
    pub findings: Vec<Finding>,
    /// Every warning the scanner raised
    pub warnings: Vec<ScanWarning>,
    /// The scanner's own summary
    pub summary: ScanSummary,
}

impl ScanReport {
    /// Did any finding mention an obsolete identifier?
    #[must_use]
    pub fn has_obsolete(&self) -> bool {
        self.findings.iter().any(|finding| !finding.matched.is_empty())
    }
}

/// A [`DirectiveSink`] applying a [`Filter`] as directives arrive
#[derive(Debug)]
struct FilteringSink<'a> {
    /// The filter to apply
    filter: &'a Filter,
    /// Directives kept so far
    findings: Vec<Finding>,
    /// Warnings so far
    warnings: Vec<ScanWarning>,
}

impl DirectiveSink for FilteringSink<'_> {
    fn emit(&mut self, directive: Directive) {
        match self.filter.matches(&directive) {
            Some(matched) => self.findings.push(Finding { directive, matched }),
            None => debug!(line = directive.line, "directive filtered out"),
        }
    }

    fn warn(&mut self, warning: ScanWarning) {
        self.warnings.push(warning);
    }
}

/// Scan `input` and collect the directives that pass `filter`. The input is
/// streamed, never held in memory as a whole.
///
/// # Errors
/// Fails if the scanner fails, see [`Scanner::run`].
pub fn run(
    input: impl BufRead,
    options: ScanOptions,
    filter: &Filter,
) -> Result<ScanReport, ScanError> {
    let mut sink = FilteringSink {
        filter,
        findings: Vec::new(),
        warnings: Vec::new(),
    };
    let summary = Scanner::new(input, options).run(&mut sink)?;

    Ok(ScanReport {
        findings: sink.findings,
        warnings: sink.warnings,
        summary,
    })
}
