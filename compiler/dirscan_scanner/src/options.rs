//! Knobs controlling how the scanner treats suspicious input

/// What to do with a backslash inside a directive that is followed by blank
/// space or the end of input instead of a linefeed.
///
/// Such a backslash never continues the directive. The policy only decides
/// whether anyone hears about it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContinuationPolicy {
    /// Keep the backslash as ordinary text and say nothing
    #[default]
    Lenient,
    /// Keep scanning, but log the problem and hand a warning to the sink
    Warn,
    /// Abort the scan with an error
    Strict,
}

/// What to do with a directive still open when the input ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EofPolicy {
    /// Emit what was collected, marked as unterminated
    #[default]
    Flush,
    /// Drop the partial directive
    Discard,
}

/// Options for a single scan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScanOptions {
    /// Malformed continuation handling
    pub continuations: ContinuationPolicy,
    /// Handling of a directive cut off by the end of input
    pub on_eof: EofPolicy,
    /// When set, a `#` inside an open string or character literal does not
    /// start a directive
    pub gate_quotes: bool,
}

impl ScanOptions {
    /// Replace the [`ContinuationPolicy`]
    #[must_use]
    pub const fn with_continuations(mut self, policy: ContinuationPolicy) -> Self {
        self.continuations = policy;
        self
    }

    /// Replace the [`EofPolicy`]
    #[must_use]
    pub const fn with_eof(mut self, policy: EofPolicy) -> Self {
        self.on_eof = policy;
        self
    }

    /// Turn quote gating on or off
    #[must_use]
    pub const fn with_gate_quotes(mut self, gate_quotes: bool) -> Self {
        self.gate_quotes = gate_quotes;
        self
    }
}
