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
    unused_qualifications,
    clippy::unwrap_used,
    clippy::print_stderr,
    clippy::print_stdout
)]
#![allow(
    clippy::multiple_crate_versions,
    clippy::cargo_common_metadata,
    clippy::module_name_repetitions
)]

use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

pub mod cursor;
mod directive;
mod error;
mod options;
mod quote;
mod scanner;
mod sink;

pub use directive::Directive;
pub use error::{describe_byte, ScanError, ScanWarning};
pub use options::{ContinuationPolicy, EofPolicy, ScanOptions};
pub use quote::QuoteState;
pub use scanner::{ScanSummary, Scanner};
pub use sink::{Collector, DirectiveSink};

/// Scan everything `reader` produces, collecting directives and warnings.
///
/// # Errors
/// See [`Scanner::run`].
pub fn scan(reader: impl Read, options: ScanOptions) -> Result<Collector, ScanError> {
    let mut collector = Collector::default();
    Scanner::new(BufReader::new(reader), options).run(&mut collector)?;
    Ok(collector)
}

/// Scan an in-memory buffer with the default [`ScanOptions`].
///
/// # Errors
/// Never fails with the default options; the [`Result`] is kept so callers
/// can use `?` uniformly.
pub fn scan_bytes(input: &[u8]) -> Result<Vec<Directive>, ScanError> {
    let mut directives = Vec::new();
    Scanner::new(input, ScanOptions::default()).run(&mut directives)?;
    Ok(directives)
}

/// Open the file at `path` and scan it. The file is closed before this
/// returns, whether or not the scan succeeded.
///
/// # Errors
/// Returns [`ScanError::Io`] if the file cannot be opened or read, and
/// otherwise see [`Scanner::run`].
pub fn scan_file(path: &Path, options: ScanOptions) -> Result<Collector, ScanError> {
    let file = File::open(path)?;
    scan(file, options)
}
