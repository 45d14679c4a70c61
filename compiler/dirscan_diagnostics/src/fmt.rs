//! Source windows for terminal diagnostics.

use ansi_term::Color;
use dirscan_utils::span::Span;
use line_span::LineSpanExt;

use crate::Severity;

/// Format the 'source window' -- the lines of `source` covered by `span`, each
/// followed by an underline marking where the span lies.
///
/// Returns an empty string when the span lies entirely outside `source`.
pub fn display_source_window(severity: Severity, span: Span, source: &str) -> String {
    // a span that ends with a linefeed would otherwise touch the following line
    let last = if span.is_empty() {
        span.start()
    } else {
        span.end() - 1
    };
    let covered = Span::from_positions(span.start(), last.max(span.start()));

    let lines = source
        .line_spans()
        .enumerate()
        .filter_map(|(n, line)| {
            let line_span = Span::from_positions(line.start(), line.end());
            Span::intersect(line_span, covered)?;
            let underline = Span::intersect(line_span, span)?;
            Some((
                n + 1,
                &source[line.start()..line.end()],
                (
                    underline.start() - line.start(),
                    underline.end() - line.start(),
                ),
            ))
        })
        .collect::<Vec<_>>();

    let Some(max_line_number_length) = lines
        .iter()
        .map(|(line, _, _)| line.to_string().len())
        .max()
    else {
        return String::new();
    };
    let max_line_number_length = max_line_number_length + 1;

    // Display format:
    // line | CODE CODE CODE CODE
    //      |      ^^^^
    lines
        .into_iter()
        .map(|(line_number, string, (start, end))| {
            format!(
                "{} {string}\n{} {} {}",
                Color::Blue
                    .bold()
                    .paint(format!("{line_number: >max_line_number_length$} |")),
                " ".repeat(max_line_number_length),
                Color::Blue.bold().paint("|"),
                severity
                    .style()
                    .paint(caret_padding(string, start) + &carets(string, start, end))
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Blank space lining up with the characters of `line` before byte `start`.
/// Tabs are kept so the terminal expands them the same way in both rows.
fn caret_padding(line: &str, start: usize) -> String {
    line.char_indices()
        .take_while(|&(index, _)| index < start)
        .map(|(_, ch)| if ch == '\t' { '\t' } else { ' ' })
        .collect()
}

/// One caret per character of `line` in the bytes `start..end`, at least one
fn carets(line: &str, start: usize, end: usize) -> String {
    let count = line
        .char_indices()
        .filter(|&(index, _)| (start..end).contains(&index))
        .count();
    "^".repeat(count.max(1))
}

#[cfg(test)]
mod tests {
    use indoc::indoc;

    use super::*;

    /// Strip ANSI escape sequences so tests can compare the layout
    fn plain(painted: &str) -> String {
        let mut output = String::new();
        let mut in_escape = false;
        for ch in painted.chars() {
            match (in_escape, ch) {
                (false, '\u{1b}') => in_escape = true,
                (true, 'm') => in_escape = false,
                (false, _) => output.push(ch),
                (true, _) => {}
            }
        }
        output
    }

    #[test]
    fn window_covers_every_continued_line() {
        let source = indoc! {r"
            int x;
            #define MAX(a, b) \
                ((a) > (b) ? (a) : (b))
            int y;
        "};
        let start = source.find('#').expect("fixture has a directive");
        let end = source.find("int y").expect("fixture has a trailer");

        let window = plain(&display_source_window(
            Severity::Note,
            Span::from_positions(start, end),
            source,
        ));

        assert_eq!(
            window,
            concat!(
                " 2 | #define MAX(a, b) \\\n",
                "   | ^^^^^^^^^^^^^^^^^^^\n",
                " 3 |     ((a) > (b) ? (a) : (b))\n",
                "   | ^^^^^^^^^^^^^^^^^^^^^^^^^^^",
            )
        );
    }

    #[test]
    fn carets_line_up_under_tabs() {
        let source = "\t#pragma once\n";
        let window = plain(&display_source_window(
            Severity::Note,
            Span::from_positions(1, source.len()),
            source,
        ));

        assert_eq!(window, " 1 | \t#pragma once\n   | \t^^^^^^^^^^^^");
    }

    #[test]
    fn carets_count_characters_not_bytes() {
        let source = "/* \u{e9}t\u{e9} */ #endif\n";
        let start = source.find('#').expect("fixture has a directive");
        let window = plain(&display_source_window(
            Severity::Note,
            Span::from_positions(start, source.len()),
            source,
        ));

        assert_eq!(
            window,
            concat!(
                " 1 | /* \u{e9}t\u{e9} */ #endif\n",
                "   |           ^^^^^^",
            )
        );
    }

    #[test]
    fn empty_span_gets_a_single_caret() {
        let window = plain(&display_source_window(
            Severity::Warning,
            Span::from_positions(10, 10),
            "#define X \\",
        ));

        assert_eq!(window, " 1 | #define X \\\n   |           ^");
    }

    #[test]
    fn span_outside_source_renders_nothing() {
        assert_eq!(
            display_source_window(Severity::Error, Span::from_positions(40, 41), "short\n"),
            ""
        );
    }
}
