// Passgen platform paths for Linux
// Config: ~/.config/passgen
// Data:   ~/.local/share/passgen

use std::env;
use std::path::PathBuf;

fn resolve(xdg: Option<String>, home: Option<String>, fallback: &[&str]) -> PathBuf {
    match xdg.filter(|v| !v.is_empty()) {
        Some(dir) => PathBuf::from(dir).join("passgen"),
        None => {
            let mut path = PathBuf::from(home.unwrap_or_else(|| String::from("/tmp")));
            for part in fallback {
                path.push(part);
            }
            path.join("passgen")
        }
    }
}

/// Uses `$XDG_CONFIG_HOME/passgen` if set, otherwise `~/.config/passgen`.
pub fn get_config_dir() -> PathBuf {
    resolve(env::var("XDG_CONFIG_HOME").ok(), env::var("HOME").ok(), &[".config"])
}

/// Uses `$XDG_DATA_HOME/passgen` if set, otherwise `~/.local/share/passgen`.
pub fn get_data_dir() -> PathBuf {
    resolve(env::var("XDG_DATA_HOME").ok(), env::var("HOME").ok(), &[".local", "share"])
}
