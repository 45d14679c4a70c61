//! Version and build details baked in by the build script

#[doc(hidden)]
#[allow(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    missing_docs,
    clippy::missing_docs_in_private_items,
    clippy::restriction
)]
pub mod build {
    include!(concat!(env!("OUT_DIR"), "/shadow.rs"));
}

/// Files with uncommitted changes at build time, one per line, without the
/// `(dirty)`/`(staged)` markers
fn modified_files() -> Vec<&'static str> {
    build::GIT_STATUS_FILE
        .lines()
        .map(|line| {
            line.strip_suffix(" (dirty)")
                .or_else(|| line.strip_suffix(" (staged)"))
                .unwrap_or(line)
        })
        .collect()
}

/// The text printed by `dirscan --version`
pub fn version() -> String {
    let tree = if build::GIT_CLEAN {
        "clean tree"
    } else {
        "modified tree"
    };
    let mut version = format!(
        "{} {} ({}, {tree}) for {}, built {} in {} mode\n{} on {}\n{}",
        build::PROJECT_NAME,
        build::PKG_VERSION,
        build::SHORT_COMMIT,
        build::BUILD_TARGET,
        build::BUILD_TIME_3339,
        build::BUILD_RUST_CHANNEL,
        build::RUST_VERSION,
        build::BUILD_OS,
        build::CARGO_VERSION,
    );

    if !build::GIT_CLEAN {
        version.push_str("\nmodified files:");
        for file in modified_files() {
            version.push_str("\n  ");
            version.push_str(file);
        }
    }
    version
}
