//! Byte ranges within a scanned input
//!
//! A [`Span`] is a half-open byte range: `start` is the offset of the first
//! byte and `end` is one past the last one. [`Spanned<T>`] pairs a value, such
//! as a diagnostic, with the range it talks about.

use std::{fmt::Display, ops::Range};

/// A half-open byte range `start..end` within some input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span(usize, usize);
impl Span {
    /// Create a new [`Span`] covering `start..end`.
    ///
    /// # Panics
    /// Panics if `start > end`.
    #[must_use]
    pub fn from_positions(start: usize, end: usize) -> Self {
        assert!(
            end >= start,
            "span must have positive length (got span {start}..{end})"
        );
        Self(start, end)
    }

    /// Offset of the first byte
    #[must_use]
    #[inline]
    pub const fn start(&self) -> usize {
        self.0
    }

    /// Offset one past the last byte
    #[must_use]
    #[inline]
    pub const fn end(&self) -> usize {
        self.1
    }

    /// Does this span cover no bytes at all?
    #[must_use]
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0 == self.1
    }

    /// The span as a [`Range`]
    #[must_use]
    #[inline]
    pub const fn range(&self) -> Range<usize> {
        self.0..self.1
    }

    /// The bytes of `input` this span covers, or [`None`] if it reaches past
    /// the end of `input`
    #[must_use]
    pub fn of<'a>(&self, input: &'a [u8]) -> Option<&'a [u8]> {
        input.get(self.range())
    }

    /// The overlap of two spans.
    ///
    /// Spans that merely touch overlap in an empty span at the shared offset.
    /// Disjoint spans give [`None`].
    #[must_use]
    pub fn intersect(span_a: Self, span_b: Self) -> Option<Self> {
        let start = span_a.start().max(span_b.start());
        let end = span_a.end().min(span_b.end());
        (start <= end).then(|| Self::from_positions(start, end))
    }
}
impl Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.start(), self.end())
    }
}

/// A value attached to the [`Span`] it describes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spanned<T>(Span, T);
impl<T> Spanned<T> {
    /// Attach `value` to `span`
    #[must_use]
    #[inline]
    pub const fn from_span_and_value(span: Span, value: T) -> Self {
        Self(span, value)
    }

    /// The [`Span`] of this value
    #[must_use]
    #[inline]
    pub const fn span(&self) -> Span {
        self.0
    }

    /// The value itself
    #[inline]
    pub const fn value(&self) -> &T {
        &self.1
    }
}
impl<T> Display for Spanned<T>
where
    T: Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.value().fmt(f)
    }
}

/// Lets any value be placed in a [`Span`] with a method call
pub trait Spannable
where
    Self: Sized,
{
    /// Attach a [`Span`] to this value
    fn in_span(self, span: Span) -> Spanned<Self>;
}

impl<T: Sized> Spannable for T {
    #[inline]
    fn in_span(self, span: Span) -> Spanned<Self> {
        Spanned::from_span_and_value(span, self)
    }
}

/// Create a [`Spanned<T>`] from a start offset, a value and an end offset.
///
/// # Panics
/// Panics if `start > end`.
#[macro_export]
macro_rules! spanned {
    ($start:expr, $value:expr, $end:expr) => {
        $crate::span::Spanned::from_span_and_value(
            $crate::span::Span::from_positions($start, $end),
            $value,
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_report_the_positions() {
        let span = Span::from_positions(2, 7);
        assert_eq!((span.start(), span.end()), (2, 7));
        assert_eq!(span.range(), 2..7);
        assert!(!span.is_empty());
        assert!(Span::from_positions(4, 4).is_empty());
        assert_eq!(span.to_string(), "2..7");
    }

    #[test]
    #[allow(clippy::let_underscore_must_use)]
    #[should_panic(expected = "span must have positive length")]
    fn reversed_positions_panic() {
        let _ = Span::from_positions(5, 0);
    }

    #[test]
    fn of_slices_the_input() {
        let input = b"int x;\n#define X 1\n";
        assert_eq!(Span::from_positions(7, 18).of(input), Some(&b"#define X 1"[..]));
        assert_eq!(Span::from_positions(7, 40).of(input), None);
    }

    #[test]
    fn intersection() {
        let intersect =
            |a: (usize, usize), b: (usize, usize)| -> Option<(usize, usize)> {
                Span::intersect(Span::from_positions(a.0, a.1), Span::from_positions(b.0, b.1))
                    .map(|span| (span.start(), span.end()))
            };

        assert_eq!(intersect((0, 6), (4, 10)), Some((4, 6)));
        assert_eq!(intersect((4, 10), (0, 6)), Some((4, 6)));
        assert_eq!(intersect((0, 10), (3, 5)), Some((3, 5)));
        assert_eq!(intersect((0, 4), (4, 9)), Some((4, 4)));
        assert_eq!(intersect((0, 5), (7, 10)), None);
    }

    #[test]
    fn values_can_be_placed_in_spans() {
        let spanned = 7.in_span(Span::from_positions(3, 6));
        assert_eq!(spanned, spanned!(3, 7, 6));
        assert_eq!(spanned.span(), Span::from_positions(3, 6));
        assert_eq!(spanned.value(), &7);
        assert_eq!(spanned.to_string(), "7");
    }
}
