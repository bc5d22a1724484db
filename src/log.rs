//! Logging setup for the command-line tool

use log::LevelFilter;
use std::env;

/// Environment variable that switches logging to debug level
pub const DEBUG_ENV_VAR: &str = "LETTERS_DEBUG";

/// Initialize `env_logger` for the binary.
///
/// Logs at `Info` unless `debug_enabled` is set. An explicit `RUST_LOG`
/// overrides both. Calling this twice is harmless; the second call is ignored.
pub fn init_logger(debug_enabled: bool) {
    let level = if debug_enabled {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    // Let RUST_LOG override our defaults if explicitly set
    if let Ok(spec) = env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    if builder.try_init().is_ok() {
        log::debug!("logger initialized at {level:?} level");
    }
}

/// Whether the debug environment variable is present
#[must_use]
pub fn debug_requested() -> bool {
    env::var_os(DEBUG_ENV_VAR).is_some()
}
