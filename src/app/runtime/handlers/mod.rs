pub mod search;

pub use search::handle_search_event;
