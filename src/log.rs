//! Logger initialisation

use log::LevelFilter;

/// Initialize logging for the CLI.
///
/// Verbose runs log at `Debug`, otherwise only warnings (such as skipped
/// argument tokens) are shown. `RUST_LOG` overrides either default.
pub fn init_logger(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    // Let RUST_LOG override our defaults if explicitly set
    if let Ok(spec) = std::env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    if builder.try_init().is_err() {
        log::warn!("Logger was already initialized");
    }
    log::debug!("Logger initialized at {level:?} level");
}
