// Passvault platform paths for Linux
// Config: ~/.config/passvault
// Data:   ~/.local/share/passvault

use std::env;
use std::path::PathBuf;

const APP_DIR: &str = "passvault";

/// Uses `$XDG_CONFIG_HOME/passvault` if set, otherwise `~/.config/passvault`.
pub fn get_config_dir() -> PathBuf {
    resolve(env::var("XDG_CONFIG_HOME").ok(), env::var("HOME").ok(), &[".config"])
}

/// Uses `$XDG_DATA_HOME/passvault` if set, otherwise `~/.local/share/passvault`.
pub fn get_data_dir() -> PathBuf {
    resolve(env::var("XDG_DATA_HOME").ok(), env::var("HOME").ok(), &[".local", "share"])
}

fn resolve(xdg: Option<String>, home: Option<String>, fallback: &[&str]) -> PathBuf {
    if let Some(xdg) = xdg.filter(|v| !v.is_empty()) {
        return PathBuf::from(xdg).join(APP_DIR);
    }
    let mut path = PathBuf::from(home.unwrap_or_else(|| String::from("/tmp")));
    for part in fallback {
        path.push(part);
    }
    path.join(APP_DIR)
}
