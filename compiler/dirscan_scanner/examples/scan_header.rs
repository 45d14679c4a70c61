// Lists the directives of a C header given on the command line, or of a small
// built-in header when run without arguments.

use std::{env, path::PathBuf};

use dirscan_scanner::{scan, scan_file, ContinuationPolicy, ScanError, ScanOptions};
use dirscan_utils::string_utils::escape_bytes;

const SAMPLE: &str = "#ifndef SAMPLE_H\n#define SAMPLE_H \\\n  1\n#endif\n";

fn main() -> Result<(), ScanError> {
    let options = ScanOptions::default().with_continuations(ContinuationPolicy::Warn);

    let collector = match env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => scan_file(&path, options)?,
        None => scan(SAMPLE.as_bytes(), options)?,
    };

    for directive in &collector.directives {
        println!("{:>4}: {}", directive.line, escape_bytes(&directive.text));
    }
    for warning in &collector.warnings {
        eprintln!("warning: {warning}");
    }
    Ok(())
}
