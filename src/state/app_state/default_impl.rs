//! Default implementation for `AppState`.

use super::{AppState, SearchBoxConfig};
use crate::state::types::Category;

impl Default for AppState {
    /// What: Construct the state of a freshly mounted, unfocused search box.
    ///
    /// Output:
    /// - Empty term, `All` category, no results, nothing selected, panel closed.
    ///
    /// Details:
    /// - Query ids start at 1 so that `latest_query_id == 0` never matches a real query.
    fn default() -> Self {
        Self {
            config: SearchBoxConfig::default(),
            input: String::new(),
            category: Category::All,
            results: Vec::new(),
            loading: false,
            selected: None,
            panel_open: false,
            input_focused: false,
            next_query_id: 1,
            latest_query_id: 0,
            spinner_frame: 0,
            scroll: 0,
            row_handles: Vec::new(),
            row_rects: Vec::new(),
            chip_rects: Vec::new(),
            input_rect: None,
            panel_rect: None,
            pending_route: None,
            on_activate: None,
        }
    }
}
