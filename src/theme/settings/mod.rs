use std::fs;
use std::path::Path;

use crate::theme::paths::resolve_settings_config_path;
use crate::theme::types::Settings;
use tracing::{debug, warn};

mod parse_settings;

pub use parse_settings::parse_settings;

/// What: Load user settings from `settings.conf` under XDG/HOME.
///
/// Inputs:
/// - None (reads `settings.conf` if present)
///
/// Output:
/// - A `Settings` value; falls back to `Settings::default()` when missing or unreadable.
#[must_use]
pub fn settings() -> Settings {
    resolve_settings_config_path().map_or_else(
        || {
            debug!("no settings.conf found; using defaults");
            Settings::default()
        },
        |path| load_settings_from(&path),
    )
}

/// What: Load settings from an explicit file.
///
/// Inputs:
/// - `path`: Settings file to read
///
/// Output:
/// - Parsed settings over defaults; defaults alone when the file cannot be read.
#[must_use]
pub fn load_settings_from(path: &Path) -> Settings {
    let mut out = Settings::default();
    match fs::read_to_string(path) {
        Ok(content) => {
            parse_settings(&content, &mut out);
            debug!(path = %path.display(), "loaded settings");
        }
        Err(e) => warn!(path = %path.display(), error = %e, "failed to read settings; using defaults"),
    }
    out
}
