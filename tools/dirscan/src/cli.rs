//! Command line interface declarations for dirscan

use std::{env, path::PathBuf};

use anyhow::bail;
use clap::Parser;
use derive_more::Display;
use dirscan::{report::Format, runner::Filter};
use dirscan_scanner::{ContinuationPolicy, EofPolicy, ScanOptions};
use dirscan_utils::string_utils::is_valid_identifier;

/// Environment variable holding extra obsolete identifiers, separated by
/// commas or whitespace
pub const OBSOLETE_ENV: &str = "DIRSCAN_OBSOLETE";

/// Find preprocessor directives in C-like source without parsing C
#[derive(Parser, Debug)]
#[command(version=None)]
pub struct Cli {
    /// See what version of dirscan you are using
    #[arg(short, long)]
    pub version: bool,

    /// The files to scan. `-` or no path at all reads standard input
    pub paths: Vec<PathBuf>,

    /// The path of the file to write the report to
    /// If not provided, the report will be written to stdout
    #[arg(short, long)]
    #[clap(default_value = "-")]
    pub out_file: PathBuf,

    /// How to render the report
    #[arg(long)]
    #[clap(default_value_t = ReportFormat::Plain)]
    pub format: ReportFormat,

    /// Only report directives with this name, such as `define`
    #[arg(short = 'd', long = "directive", action = clap::ArgAction::Append)]
    pub directives: Vec<String>,

    /// Only report directives mentioning this identifier. Any match makes
    /// dirscan exit with status 1
    #[arg(short = 'x', long = "obsolete", action = clap::ArgAction::Append)]
    pub obsolete: Vec<String>,

    /// What to do with a backslash followed by blank space inside a directive
    #[arg(long)]
    #[clap(default_value_t = Continuations::Warn)]
    pub continuations: Continuations,

    /// What to do with a directive cut off by the end of input
    #[arg(long = "on-eof")]
    #[clap(default_value_t = OnEof::Flush)]
    pub on_eof: OnEof,

    /// Do not start directives inside string or character literals
    #[arg(long)]
    pub gate_quotes: bool,
}

/// The list of report formats dirscan can emit
#[derive(Debug, Clone, Copy, clap::ValueEnum, PartialEq, Eq, Display)]
pub enum ReportFormat {
    /// `file:line: "text"`, one directive per line
    #[display("plain")]
    Plain,
    /// The directives themselves, as source code
    #[display("source")]
    Source,
    /// Colored diagnostics with the surrounding source
    #[display("pretty")]
    Pretty,
}
impl From<ReportFormat> for Format {
    fn from(val: ReportFormat) -> Self {
        match val {
            ReportFormat::Plain => Self::Plain,
            ReportFormat::Source => Self::Source,
            ReportFormat::Pretty => Self::Pretty,
        }
    }
}

/// Handling of malformed continuations
#[derive(Debug, Clone, Copy, clap::ValueEnum, PartialEq, Eq, Display)]
pub enum Continuations {
    /// Keep the backslash as text and say nothing
    #[display("lenient")]
    Lenient,
    /// Keep going, but print a warning
    #[display("warn")]
    Warn,
    /// Stop scanning the file with an error
    #[display("strict")]
    Strict,
}
impl From<Continuations> for ContinuationPolicy {
    fn from(val: Continuations) -> Self {
        match val {
            Continuations::Lenient => Self::Lenient,
            Continuations::Warn => Self::Warn,
            Continuations::Strict => Self::Strict,
        }
    }
}

/// Handling of directives cut off by the end of input
#[derive(Debug, Clone, Copy, clap::ValueEnum, PartialEq, Eq, Display)]
pub enum OnEof {
    /// Report what was collected
    #[display("flush")]
    Flush,
    /// Drop it
    #[display("discard")]
    Discard,
}
impl From<OnEof> for EofPolicy {
    fn from(val: OnEof) -> Self {
        match val {
            OnEof::Flush => Self::Flush,
            OnEof::Discard => Self::Discard,
        }
    }
}

/// Check that every entry is a C identifier, dropping duplicates
fn validated<'a>(
    kind: &str,
    entries: impl IntoIterator<Item = &'a str>,
) -> anyhow::Result<Vec<String>> {
    let mut identifiers: Vec<String> = Vec::new();
    for entry in entries {
        if !is_valid_identifier(entry) {
            bail!("invalid {kind} `{entry}`: expected a C identifier");
        }
        if !identifiers.iter().any(|known| known == entry) {
            identifiers.push(entry.to_string());
        }
    }
    Ok(identifiers)
}

/// Merge the obsolete identifiers given with `-x` and those in the
/// environment value
fn merge_obsolete(from_cli: &[String], from_env: Option<&str>) -> anyhow::Result<Vec<String>> {
    let from_env = from_env
        .into_iter()
        .flat_map(|value| value.split(|ch: char| ch == ',' || ch.is_whitespace()))
        .filter(|entry| !entry.is_empty());

    validated(
        "obsolete identifier",
        from_cli.iter().map(String::as_str).chain(from_env),
    )
}

/// Build the directive [`Filter`] from the CLI and the environment
///
/// Identifiers are taken in the following order:
/// 1. CLI
/// 2. `DIRSCAN_OBSOLETE` env var
pub fn get_filter(cli: &Cli) -> anyhow::Result<Filter> {
    Ok(Filter {
        directives: validated("directive name", cli.directives.iter().map(String::as_str))?,
        obsolete: merge_obsolete(&cli.obsolete, env::var(OBSOLETE_ENV).ok().as_deref())?,
    })
}

/// The scanner options selected on the command line
pub fn get_scan_options(cli: &Cli) -> ScanOptions {
    ScanOptions::default()
        .with_continuations(cli.continuations.into())
        .with_eof(cli.on_eof.into())
        .with_gate_quotes(cli.gate_quotes)
}
