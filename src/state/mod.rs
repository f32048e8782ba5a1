//! Component state and the value types flowing through it.
//!
//! `types` holds wire and message types, `app_state` the single owned
//! `AppState` mutated by the event, worker and UI layers.

pub mod app_state;
pub mod types;

pub use app_state::{ActivationCallback, AppState, Rect4, RowHandle, SearchBoxConfig};
pub use types::{
    Category, QueryInput, ResultDetail, ResultKind, Route, SearchEvent, SearchResult,
};
