// QRBar platform paths for Linux
// Config: ~/.config/qrbar

use std::env;
use std::path::PathBuf;

/// Returns the configuration directory for QRBar on Linux.
/// Uses `$XDG_CONFIG_HOME/qrbar` if set, otherwise `~/.config/qrbar`.
pub fn get_config_dir() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        PathBuf::from(xdg).join("qrbar")
    } else {
        let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
        PathBuf::from(home).join(".config").join("qrbar")
    }
}
