//! Shared utilities for argument processing.

use crate::args::Args;
use crate::theme::Settings;

/// What: Determine the log level based on command-line arguments.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
///
/// Output:
/// - Log level string (trace, debug, info, warn, error).
///
/// Details:
/// - Verbose flag overrides the `--log-level` argument.
#[must_use]
pub fn determine_log_level(args: &Args) -> String {
    if args.verbose {
        "debug".to_string()
    } else {
        args.log_level.clone()
    }
}

/// What: Layer command-line overrides on top of file settings.
///
/// Inputs:
/// - `settings`: Settings loaded from `settings.conf` (or defaults).
/// - `args`: Parsed command-line arguments.
///
/// Output:
/// - Settings with every flag that was given applied.
///
/// Details:
/// - A zero `--limit` is ignored, matching how the file parser treats it.
/// - `--auto-focus` can only turn auto-focus on.
#[must_use]
pub fn apply_overrides(mut settings: Settings, args: &Args) -> Settings {
    if let Some(url) = args.base_url.as_deref().map(str::trim).filter(|u| !u.is_empty()) {
        settings.api_base_url = url.to_string();
    }
    if let Some(limit) = args.limit.filter(|l| *l > 0) {
        settings.search_limit = limit;
    }
    if let Some(ms) = args.debounce_ms {
        settings.debounce_ms = ms;
    }
    if let Some(p) = &args.placeholder {
        settings.placeholder.clone_from(p);
    }
    if args.auto_focus {
        settings.auto_focus = true;
    }
    settings
}
