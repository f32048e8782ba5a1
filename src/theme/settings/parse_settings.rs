use crate::theme::parsing::{parse_bool, strip_inline_comment};
use crate::theme::types::Settings;

/// What: Parse settings from `settings.conf` content.
///
/// Inputs:
/// - `content`: Content of the settings.conf file as a string.
/// - `settings`: Mutable reference to `Settings` to populate.
///
/// Output:
/// - None (modifies `settings` in-place).
///
/// Details:
/// - Lines are `key = value`; blank lines and `#`, `//`, `;` comments are skipped.
/// - Keys are case-insensitive and accept `.`, `-` or spaces in place of `_`.
/// - Unknown keys and unparsable values leave the current value untouched.
/// - `placeholder` is free text: inline comments are not stripped from it.
pub fn parse_settings(content: &str, settings: &mut Settings) {
    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty()
            || trimmed.starts_with('#')
            || trimmed.starts_with("//")
            || trimmed.starts_with(';')
        {
            continue;
        }
        let Some((raw_key, val_raw)) = trimmed.split_once('=') else {
            continue;
        };
        let key = raw_key.trim().to_lowercase().replace(['.', '-', ' '], "_");
        let val = strip_inline_comment(val_raw.trim());
        match key.as_str() {
            "api_base_url" | "base_url" | "api_url" => {
                if !val.is_empty() {
                    settings.api_base_url = val.to_string();
                }
            }
            "search_limit" | "limit" => {
                if let Ok(v) = val.parse::<u32>()
                    && v > 0
                {
                    settings.search_limit = v;
                }
            }
            "debounce_ms" | "debounce" => {
                if let Ok(v) = val.parse::<u64>() {
                    settings.debounce_ms = v;
                }
            }
            "request_timeout_secs" | "timeout" => {
                if let Ok(v) = val.parse::<u64>()
                    && v > 0
                {
                    settings.request_timeout_secs = v;
                }
            }
            "placeholder" => {
                let text = val_raw.trim();
                if !text.is_empty() {
                    settings.placeholder = text.to_string();
                }
            }
            "auto_focus" | "autofocus" => {
                settings.auto_focus = parse_bool(val);
            }
            "web_base_url" | "web_url" => {
                settings.web_base_url = val.to_string();
            }
            "open_in_browser" => {
                settings.open_in_browser = parse_bool(val);
            }
            _ => {
                tracing::debug!(key = %key, "ignoring unknown settings key");
            }
        }
    }
}
