// QRBar platform abstraction
// Provides the platform-specific preferences location.
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

/// Returns the platform-specific configuration directory for QRBar.
///
/// - **Linux**: `~/.config/qrbar` (or `$XDG_CONFIG_HOME/qrbar`)
/// - **macOS**: `~/Library/Application Support/QRBar`
/// - **Windows**: `%APPDATA%/QRBar`
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
