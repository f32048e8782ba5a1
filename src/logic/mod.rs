//! Core non-UI logic split into modular submodules.

pub mod activation;
pub mod filter;
pub mod query;
pub mod selection;

pub use activation::{Activation, activate, activate_selected};
pub use filter::{Partitioned, partition, visible_len, visible_results};
pub use query::{
    clear_input, cycle_category, escape, focus, pop_char, push_char, send_query, set_category,
    set_input,
};
pub use selection::{hover, move_down, move_up, scroll_into_view, step_down, step_up};
