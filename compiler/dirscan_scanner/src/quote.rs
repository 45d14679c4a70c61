//! String and character literal tracking

/// Which kind of quoted region, if any, the scanner is inside of.
///
/// Holding this as one value rather than two flags keeps a double-quoted and
/// a single-quoted region from ever being open at the same time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuoteState {
    /// Outside any quoted region
    #[default]
    Unquoted,
    /// Inside a `"` region
    Double,
    /// Inside a `'` region
    Single,
}

impl QuoteState {
    /// Compute the state after `current` has been consumed.
    ///
    /// A quote preceded by a backslash never toggles anything, and a quote of
    /// the other kind is plain text while a region is open.
    #[must_use]
    pub const fn update(self, prev: Option<u8>, current: Option<u8>) -> Self {
        if matches!(prev, Some(b'\\')) {
            return self;
        }

        match (self, current) {
            (Self::Unquoted, Some(b'"')) => Self::Double,
            (Self::Double, Some(b'"')) | (Self::Single, Some(b'\'')) => Self::Unquoted,
            (Self::Unquoted, Some(b'\'')) => Self::Single,
            (Self::Unquoted | Self::Double | Self::Single, _) => self,
        }
    }

    /// Is a `"` region open?
    #[must_use]
    #[inline]
    pub const fn in_double_quoted(self) -> bool {
        matches!(self, Self::Double)
    }

    /// Is a `'` region open?
    #[must_use]
    #[inline]
    pub const fn in_single_quoted(self) -> bool {
        matches!(self, Self::Single)
    }

    /// Is any quoted region open?
    #[must_use]
    #[inline]
    pub const fn is_quoted(self) -> bool {
        !matches!(self, Self::Unquoted)
    }
}
