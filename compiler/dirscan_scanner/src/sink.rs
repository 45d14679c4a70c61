//! Where scanned directives go

use crate::{Directive, ScanWarning};

/// Receives directives, in stream order, as the scanner completes them.
pub trait DirectiveSink {
    /// Called exactly once per completed directive
    fn emit(&mut self, directive: Directive);

    /// Called for every [`ScanWarning`]. Ignored unless overridden.
    fn warn(&mut self, _warning: ScanWarning) {}
}

impl DirectiveSink for Vec<Directive> {
    #[inline]
    fn emit(&mut self, directive: Directive) {
        self.push(directive);
    }
}

impl<S: DirectiveSink + ?Sized> DirectiveSink for &mut S {
    #[inline]
    fn emit(&mut self, directive: Directive) {
        (**self).emit(directive);
    }

    #[inline]
    fn warn(&mut self, warning: ScanWarning) {
        (**self).warn(warning);
    }
}

/// A sink keeping both directives and warnings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Collector {
    /// Every emitted directive, in stream order
    pub directives: Vec<Directive>,
    /// Every warning, in stream order
    pub warnings: Vec<ScanWarning>,
}

impl DirectiveSink for Collector {
    fn emit(&mut self, directive: Directive) {
        self.directives.push(directive);
    }

    fn warn(&mut self, warning: ScanWarning) {
        self.warnings.push(warning);
    }
}

#[cfg(test)]
mod tests {
    use dirscan_utils::span::Span;

    use super::*;

    /// A terminated `#pragma` on line 2
    fn sample() -> Directive {
        Directive {
            line: 2,
            end_line: 2,
            span: Span::from_positions(4, 12),
            text: b"pragma\n".to_vec(),
            terminated: true,
        }
    }

    /// Feed one directive and one warning into any sink
    fn feed<S: DirectiveSink>(mut sink: S) {
        sink.emit(sample());
        sink.warn(ScanWarning::UnterminatedDirective {
            line: 2,
            span: Span::from_positions(4, 12),
        });
    }

    #[test]
    fn forwarding_through_a_reference_reaches_the_sink() {
        let mut collector = Collector::default();
        feed(&mut collector);
        assert_eq!(collector.directives, vec![sample()]);
        assert_eq!(collector.warnings.len(), 1);
    }

    #[test]
    fn vec_sink_ignores_warnings() {
        let mut directives: Vec<Directive> = Vec::new();
        directives.warn(ScanWarning::UnterminatedDirective {
            line: 1,
            span: Span::from_positions(0, 1),
        });
        directives.emit(sample());
        assert_eq!(directives, vec![sample()]);
    }
}
