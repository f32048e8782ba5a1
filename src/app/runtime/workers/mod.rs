/// Debounced search worker.
pub mod search;
