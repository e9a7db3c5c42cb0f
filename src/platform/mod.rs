// Passgen platform abstraction
// Provides platform-specific paths for Windows, macOS, and Linux.
//
// Uses `cfg(target_os)` for conditional compilation to select the correct
// platform-specific implementation at compile time.

use std::path::PathBuf;

#[cfg(target_os = "linux")]
mod linux;

#[cfg(target_os = "macos")]
mod macos;

#[cfg(target_os = "windows")]
mod windows;

/// File name of the default database inside the data directory.
pub const DATABASE_FILE_NAME: &str = "passgen.db";

/// Returns the platform-specific configuration directory for Passgen.
///
/// - **Linux**: `~/.config/passgen` (or `$XDG_CONFIG_HOME/passgen`)
/// - **macOS**: `~/Library/Application Support/Passgen`
/// - **Windows**: `%APPDATA%/Passgen`
pub fn get_config_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        linux::get_config_dir()
    }
    #[cfg(target_os = "macos")]
    {
        macos::get_config_dir()
    }
    #[cfg(target_os = "windows")]
    {
        windows::get_config_dir()
    }
}

/// Returns the platform-specific data directory for Passgen.
///
/// - **Linux**: `~/.local/share/passgen` (or `$XDG_DATA_HOME/passgen`)
/// - **macOS**: `~/Library/Application Support/Passgen`
/// - **Windows**: `%APPDATA%/Passgen`
pub fn get_data_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        linux::get_data_dir()
    }
    #[cfg(target_os = "macos")]
    {
        macos::get_data_dir()
    }
    #[cfg(target_os = "windows")]
    {
        windows::get_data_dir()
    }
}

/// Default database location: `<data dir>/passgen.db`.
pub fn default_database_path() -> PathBuf {
    get_data_dir().join(DATABASE_FILE_NAME)
}
