use ratatui::style::Color;

use crate::app::SearchWorkerConfig;
use crate::sources::DEFAULT_LIMIT;
use crate::state::SearchBoxConfig;
use crate::state::app_state::DEFAULT_PLACEHOLDER;

/// Application theme palette used by rendering code.
///
/// All colors are provided as [`ratatui::style::Color`] and are suitable for
/// direct use with widgets and styles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    /// Primary background color for the canvas.
    pub base: Color,
    /// Slightly lighter background layer used behind panels.
    pub mantle: Color,
    /// Darkest background shade for deep contrast areas.
    pub crust: Color,
    /// Subtle surface color for the selected row.
    pub surface1: Color,
    /// Muted overlay line/border color.
    pub overlay1: Color,
    /// Primary foreground text color.
    pub text: Color,
    /// Secondary text for less prominent content.
    pub subtext0: Color,
    /// Accent color for focus and the active chip.
    pub sapphire: Color,
    /// Accent color for group headers.
    pub mauve: Color,
    /// Course badge color.
    pub green: Color,
    /// Module badge color.
    pub yellow: Color,
    /// Content badge color.
    pub lavender: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            base: Color::Rgb(0x1e, 0x1e, 0x2e),
            mantle: Color::Rgb(0x18, 0x18, 0x25),
            crust: Color::Rgb(0x11, 0x11, 0x1b),
            surface1: Color::Rgb(0x45, 0x47, 0x5a),
            overlay1: Color::Rgb(0x7f, 0x84, 0x9c),
            text: Color::Rgb(0xcd, 0xd6, 0xf4),
            subtext0: Color::Rgb(0xa6, 0xad, 0xc8),
            sapphire: Color::Rgb(0x74, 0xc7, 0xec),
            mauve: Color::Rgb(0xcb, 0xa6, 0xf7),
            green: Color::Rgb(0xa6, 0xe3, 0xa1),
            yellow: Color::Rgb(0xf9, 0xe2, 0xaf),
            lavender: Color::Rgb(0xb4, 0xbe, 0xfe),
        }
    }
}

/// User-configurable application settings parsed from `settings.conf`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct Settings {
    /// Scheme and authority of the LMS REST API.
    pub api_base_url: String,
    /// `limit` sent with each search.
    pub search_limit: u32,
    /// Debounce quiescence window in milliseconds.
    pub debounce_ms: u64,
    /// Whole-request timeout in seconds.
    pub request_timeout_secs: u64,
    /// Input placeholder.
    pub placeholder: String,
    /// Focus the input on start.
    pub auto_focus: bool,
    /// Base URL of the web front end used to build course page links.
    pub web_base_url: String,
    /// Open course pages in the browser on activation.
    pub open_in_browser: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8000".to_string(),
            search_limit: DEFAULT_LIMIT,
            debounce_ms: 300,
            request_timeout_secs: 10,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            auto_focus: false,
            web_base_url: String::new(),
            open_in_browser: false,
        }
    }
}

impl Settings {
    /// Caller configuration for the search box.
    #[must_use]
    pub fn search_box_config(&self) -> SearchBoxConfig {
        SearchBoxConfig {
            placeholder: self.placeholder.clone(),
            auto_focus: self.auto_focus,
            style: None,
        }
    }

    /// Debounce and limit for the search worker.
    #[must_use]
    pub const fn worker_config(&self) -> SearchWorkerConfig {
        SearchWorkerConfig {
            debounce: std::time::Duration::from_millis(self.debounce_ms),
            limit: self.search_limit,
        }
    }
}
