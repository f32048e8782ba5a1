use super::types::Theme;

/// What: Return the active theme palette.
///
/// Details:
/// - The palette is the built-in one; `settings.conf` carries no color keys.
#[must_use]
pub fn theme() -> Theme {
    Theme::default()
}
