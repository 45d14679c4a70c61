#![doc=include_str!("../README.md")]
#![allow(unknown_lints)] // in case you use non-nightly clippy
#![warn(
    clippy::cargo,
    clippy::nursery,
    clippy::pedantic,
    clippy::missing_docs_in_private_items,
    missing_docs,
    clippy::absolute_paths,
    clippy::as_conversions,
    clippy::dbg_macro,
    clippy::decimal_literal_representation,
    clippy::deref_by_slicing,
    clippy::disallowed_script_idents,
    clippy::else_if_without_else,
    clippy::empty_structs_with_brackets,
    clippy::format_push_string,
    clippy::if_then_some_else_none,
    clippy::let_underscore_must_use,
    clippy::min_ident_chars,
    clippy::mixed_read_write_in_expression,
    clippy::multiple_inherent_impl,
    clippy::non_ascii_literal,
    clippy::redundant_type_annotations,
    clippy::rest_pat_in_fully_bound_structs,
    clippy::same_name_method,
    clippy::semicolon_inside_block,
    clippy::unseparated_literal_suffix,
    clippy::implicit_clone,
    clippy::todo,
    clippy::unimplemented,
    clippy::unneeded_field_pattern,
    clippy::wildcard_enum_match_arm,
    let_underscore_drop,
    macro_use_extern_crate,
    missing_debug_implementations,
    unused_crate_dependencies,
    unused_qualifications,
    clippy::unwrap_used
)]
#![allow(
    clippy::multiple_crate_versions,
    clippy::cargo_common_metadata,
    unused_crate_dependencies,
    clippy::module_name_repetitions
)]

mod build_info;
mod cli;
mod ice;

use std::{
    io::{BufReader, Write},
    path::{Path, PathBuf},
    process,
};

use clap::Parser;
use cli::{Cli, ReportFormat};
use dirscan::{report, runner};
use dirscan_utils::io;
use tracing::debug;

/// Install the tracing subscriber, only if `RUST_LOG` is set
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .with(EnvFilter::from_default_env())
            .init();
    }
}

/// What scanning one input amounted to
struct Outcome {
    /// Directives written to the report
    reported: usize,
    /// Did a directive mention an obsolete identifier?
    obsolete: bool,
}

/// Scan one input and write its report. Errors that concern only this input
/// are printed and turned into `Ok(None)` so the remaining inputs still get
/// scanned.
///
/// The input is streamed through the scanner unless the pretty format needs
/// the whole source for its windows.
fn scan_one(
    path: &Path,
    cli: &Cli,
    filter: &runner::Filter,
    output: &mut dyn Write,
) -> anyhow::Result<Option<Outcome>> {
    let options = cli::get_scan_options(cli);
    let unreadable = |err: std::io::Error| {
        eprintln!("error: could not read {}: {err}", path.display());
    };

    let (file_name, source, scanned) = if cli.format == ReportFormat::Pretty {
        let (file_name, content) = match io::read_input(path) {
            Ok(input) => input,
            Err(err) => {
                unreadable(err);
                return Ok(None);
            }
        };
        debug!(file_name = %file_name, bytes = content.len(), "scanning buffered input");
        let scanned = runner::run(content.as_slice(), options, filter);
        (file_name, Some(content), scanned)
    } else {
        let (file_name, reader) = match io::open_input(path) {
            Ok(input) => input,
            Err(err) => {
                unreadable(err);
                return Ok(None);
            }
        };
        debug!(file_name = %file_name, "scanning streamed input");
        let scanned = runner::run(BufReader::new(reader), options, filter);
        (file_name, None, scanned)
    };
    let source_text = source
        .as_deref()
        .and_then(|source| std::str::from_utf8(source).ok());

    let report = match scanned {
        Ok(report) => report,
        Err(err) => {
            match (err.to_diagnostic(), source_text) {
                (Some(diagnostic), Some(source)) => {
                    eprintln!("{}", diagnostic.print(&file_name, Some(source)));
                }
                _ => eprintln!("error: {file_name}: {err}"),
            }
            return Ok(None);
        }
    };

    if !report.warnings.is_empty() {
        eprintln!(
            "{}",
            report::render_warnings(&file_name, source.as_deref(), &report.warnings)
        );
    }
    output.write_all(&report::render(
        cli.format.into(),
        &file_name,
        source.as_deref(),
        &report,
    ))?;

    Ok(Some(Outcome {
        reported: report.findings.len(),
        obsolete: report.has_obsolete(),
    }))
}

fn main() -> anyhow::Result<()> {
    ice::setup_panic_hook();
    init_tracing();

    let cli = Cli::parse();

    if cli.version {
        println!("{}", build_info::version());
        return Ok(());
    }

    let filter = cli::get_filter(&cli)?;
    let paths = if cli.paths.is_empty() {
        vec![PathBuf::from("-")]
    } else {
        cli.paths.clone()
    };

    let mut output = io::open_output(&cli.out_file)?;
    let mut reported = 0;
    let mut failed = false;
    let mut obsolete = false;

    for path in &paths {
        match scan_one(path, &cli, &filter, &mut output)? {
            Some(outcome) => {
                reported += outcome.reported;
                obsolete |= outcome.obsolete;
            }
            None => failed = true,
        }
    }
    output.flush()?;

    eprintln!("Scan complete: {reported} directive(s) reported.");

    if failed || obsolete {
        process::exit(1);
    }

    Ok(())
}
