//! Central `AppState` container owned by the search box.

use ratatui::style::Style;

use crate::state::types::{Category, Route, SearchResult};

mod default_impl;

/// Placeholder shown in the empty input box.
pub const DEFAULT_PLACEHOLDER: &str = "Rechercher une formation, un module...";

/// Screen rectangle as `(x, y, width, height)`, recorded during render for mouse hit-testing.
pub type Rect4 = (u16, u16, u16, u16);

/// Caller-supplied hook that replaces default navigation on activation.
pub type ActivationCallback = Box<dyn Fn(&SearchResult) + Send + Sync>;

/// Caller configuration of the search box.
#[derive(Clone, Debug)]
pub struct SearchBoxConfig {
    /// Text shown while the input is empty.
    pub placeholder: String,
    /// Focus the input (and open the panel) when the component mounts.
    pub auto_focus: bool,
    /// Optional style applied to the input box border and text.
    pub style: Option<Style>,
}

impl Default for SearchBoxConfig {
    fn default() -> Self {
        Self {
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            auto_focus: false,
            style: None,
        }
    }
}

/// Position of a visible result row inside the rendered results panel.
///
/// `line` is relative to the top of the unscrolled panel content, so the
/// presenter can bring any row into view by adjusting its scroll offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RowHandle {
    /// First content line of the row.
    pub line: u16,
    /// Number of lines the row occupies.
    pub height: u16,
}

/// Search box state shared by the event, worker and UI layers.
///
/// Owned exclusively by the component; background tasks only talk to it
/// through channels.
#[allow(clippy::struct_excessive_bools)]
pub struct AppState {
    /// Caller configuration.
    pub config: SearchBoxConfig,
    /// Current search input text.
    pub input: String,
    /// Active category chip.
    pub category: Category,
    /// Last accepted result set, in server order.
    pub results: Vec<SearchResult>,
    /// A fetch for `latest_query_id` has been dispatched and not yet resolved.
    pub loading: bool,
    /// Index into the flattened visible list; `None` when nothing is selected.
    pub selected: Option<usize>,
    /// Whether the results panel is shown.
    pub panel_open: bool,
    /// Whether the input box holds keyboard focus.
    pub input_focused: bool,
    /// Identifier handed to the next query.
    pub next_query_id: u64,
    /// Identifier of the most recent query; events for any other id are stale.
    pub latest_query_id: u64,
    /// Spinner animation frame, advanced by the runtime tick.
    pub spinner_frame: usize,
    /// First visible content line of the results panel.
    pub scroll: u16,
    /// Row handles by visible index, recorded on the last render.
    pub row_handles: Vec<RowHandle>,
    /// On-screen rectangles of visible rows, keyed by visible index.
    pub row_rects: Vec<(usize, Rect4)>,
    /// On-screen rectangles of the category chips.
    pub chip_rects: Vec<(Category, Rect4)>,
    /// On-screen rectangle of the input box.
    pub input_rect: Option<Rect4>,
    /// On-screen rectangle of the results panel while it is shown.
    pub panel_rect: Option<Rect4>,
    /// Navigation produced by the last activation, waiting for the runtime.
    pub pending_route: Option<Route>,
    /// Replaces default navigation when set.
    pub on_activate: Option<ActivationCallback>,
}

impl AppState {
    /// What: Mount a search box with the given configuration.
    ///
    /// Inputs:
    /// - `config`: Placeholder, auto-focus flag and style hook.
    ///
    /// Output:
    /// - Fresh state with an empty term and the `All` category.
    ///
    /// Details:
    /// - With `auto_focus`, the input starts focused and the panel open.
    #[must_use]
    pub fn new(config: SearchBoxConfig) -> Self {
        let focused = config.auto_focus;
        Self {
            config,
            input_focused: focused,
            panel_open: focused,
            ..Self::default()
        }
    }

    /// Install a caller activation callback, replacing default navigation.
    #[must_use]
    pub fn with_activation_callback(mut self, callback: ActivationCallback) -> Self {
        self.on_activate = Some(callback);
        self
    }

    /// Whether the current term is blank after trimming.
    #[must_use]
    pub fn term_is_blank(&self) -> bool {
        self.input.trim().is_empty()
    }
}
