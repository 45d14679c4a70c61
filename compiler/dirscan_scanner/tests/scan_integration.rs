use std::fs;

use dirscan_scanner::{scan_file, ContinuationPolicy, EofPolicy, ScanOptions, ScanWarning};

#[test]
fn scan_file_finds_directives_in_a_header() {
    let header = std::env::temp_dir().join("dirscan_integration_config.h");
    fs::write(
        &header,
        concat!(
            "/* generated */\n",
            "#ifndef CONFIG_H\n",
            "#define CONFIG_H\n",
            "\n",
            "static const char *name = \"#not a directive\";\n",
            "  #define HAVE_OLD_API \\\n",
            "          1\n",
            "#endif\n",
        ),
    )
    .expect("Failed to write header");

    let collector = scan_file(&header, ScanOptions::default()).expect("Scan should succeed");

    let found: Vec<_> = collector
        .directives
        .iter()
        .map(|directive| (directive.line, directive.name().unwrap_or_default()))
        .collect();
    assert_eq!(
        found,
        vec![(2, "ifndef"), (3, "define"), (6, "define"), (8, "endif")]
    );
    assert!(collector.directives[2].mentions("HAVE_OLD_API"));
    assert!(collector.warnings.is_empty());

    drop(fs::remove_file(&header));
}

#[test]
fn scan_file_honours_the_options() {
    let header = std::env::temp_dir().join("dirscan_integration_truncated.h");
    fs::write(&header, "#define BROKEN \\ \n#if 1").expect("Failed to write header");

    let collector = scan_file(
        &header,
        ScanOptions::default()
            .with_continuations(ContinuationPolicy::Warn)
            .with_eof(EofPolicy::Discard),
    )
    .expect("Scan should succeed");

    assert_eq!(collector.directives.len(), 1);
    assert!(matches!(
        collector.warnings.as_slice(),
        [
            ScanWarning::MalformedContinuation { line: 1, .. },
            ScanWarning::UnterminatedDirective { line: 2, .. },
        ]
    ));

    drop(fs::remove_file(&header));
}
