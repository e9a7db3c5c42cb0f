//! Logger setup.
//!
//! All modules log through the `log` facade; this wires it to `env_logger`
//! on stderr. `RUST_LOG` takes precedence over the configured level.
//! Passwords and hashes are never passed to the logger.

use crate::types::settings::LogLevel;

/// Installs the global logger. Calling it twice is harmless.
pub fn init(level: LogLevel) {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level.into())
        .format_timestamp_secs()
        .format_module_path(true)
        .target(env_logger::Target::Stderr);

    if let Ok(spec) = std::env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    if builder.try_init().is_err() {
        log::debug!("Logger already initialized");
    }
}
