//! Internal error handling for dirscan
//!
//! A panic in dirscan is always a bug in dirscan, never a problem with the
//! scanned input. The hook installed here says so, and prints the version
//! and command line so the report is actionable.

use std::panic::PanicHookInfo;

/// Prints the internal error banner around the default panic output
fn ice_hook(
    default_panic_hook: &'static (dyn Fn(&PanicHookInfo<'_>) + Send + Sync),
    panic_info: &PanicHookInfo,
) {
    eprintln!("error: internal error encountered: thread panicked");
    eprintln!("note: this is not a problem with your input. this is ALWAYS a dirscan bug.");
    eprintln!("note: please include the following in your bug report:");
    eprintln!();
    eprintln!(
        "{}",
        super::build_info::version()
            .lines()
            .map(|line| format!("note: {line}"))
            .collect::<Vec<_>>()
            .join("\n")
    );
    eprintln!();
    eprintln!(
        "note: command line arguments: {}",
        std::env::args().collect::<Vec<_>>().join(" ")
    );
    eprintln!();
    default_panic_hook(panic_info);
    eprintln!();
    eprintln!("error: end internal error. scan aborted.");
}

/// Configures the global panic hook
///
/// Also sets `RUST_BACKTRACE=1` unless the user asked for `full`, so every
/// report comes with a backtrace.
pub fn setup_panic_hook() {
    // the hook API needs a 'static reference to the previous hook
    let default_panic_hook: &'static _ = Box::leak(std::panic::take_hook());

    std::panic::set_hook(Box::new(|panic_info| {
        ice_hook(default_panic_hook, panic_info);
    }));

    if std::env::var("RUST_BACKTRACE").ok().as_deref() != Some("full") {
        std::env::set_var("RUST_BACKTRACE", "1");
    }
}
