//! Result activation shared by Enter and mouse click.

use tokio::sync::mpsc;

use crate::logic::filter::visible_results;
use crate::logic::query::clear_input;
use crate::state::{AppState, QueryInput, Route, SearchResult};

/// Outcome of an activation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Activation {
    /// The caller callback handled the result.
    Delegated,
    /// Default navigation to the given route.
    Navigated(Route),
    /// No navigation target could be derived.
    Ignored,
}

/// What: Commit to a search result.
///
/// Inputs:
/// - `app`: Mutable state.
/// - `result`: Activated row.
/// - `query_tx`: Channel to the search worker (the term is cleared).
///
/// Output:
/// - What happened to the result.
///
/// Details:
/// - A caller callback, when installed, replaces default navigation entirely.
/// - Default navigation opens the course page: the course itself, or the parent
///   course of a module/content. Without a `course_id` nothing is navigated and a
///   warning is logged.
/// - Whatever the path, the term is cleared and the panel closed afterwards.
pub fn activate(
    app: &mut AppState,
    result: &SearchResult,
    query_tx: &mpsc::UnboundedSender<QueryInput>,
) -> Activation {
    let outcome = if let Some(cb) = app.on_activate.as_ref() {
        cb(result);
        Activation::Delegated
    } else if let Some(course_id) = result.target_course_id() {
        let route = Route::CourseDetail { course_id };
        tracing::info!(kind = ?result.kind(), id = result.id, path = %route.path(), "navigating to search result");
        app.pending_route = Some(route);
        Activation::Navigated(route)
    } else {
        tracing::warn!(
            kind = ?result.kind(),
            id = result.id,
            "search result has no course_id; navigation skipped"
        );
        Activation::Ignored
    };
    clear_input(app, query_tx);
    app.panel_open = false;
    outcome
}

/// What: Activate the currently selected visible row (Enter).
///
/// Output:
/// - `None` when nothing is selected or the index no longer fits the visible list.
pub fn activate_selected(
    app: &mut AppState,
    query_tx: &mpsc::UnboundedSender<QueryInput>,
) -> Option<Activation> {
    let idx = app.selected?;
    let result = visible_results(&app.results, app.category)
        .get(idx)
        .map(|r| (*r).clone())?;
    Some(activate(app, &result, query_tx))
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::state::Category;
    use crate::test_utils::{content, course, module, new_app};

    #[test]
    /// What: Enter on visible index 3 activates the second module.
    ///
    /// Inputs:
    /// - 2 courses and 3 modules, category `All`, selection 3.
    ///
    /// Output:
    /// - Navigation to module2's parent course; term cleared and panel closed.
    fn enter_activates_item_by_flattened_index() {
        let mut app = new_app();
        app.input = "x".into();
        app.panel_open = true;
        app.results = vec![
            course(1, "course1", None),
            module(10, "module1", Some(1)),
            course(2, "course2", None),
            module(11, "module2", Some(2)),
            module(12, "module3", Some(1)),
        ];
        app.selected = Some(3);
        let (tx, mut rx) = mpsc::unbounded_channel();
        let out = activate_selected(&mut app, &tx);
        assert_eq!(
            out,
            Some(Activation::Navigated(Route::CourseDetail { course_id: 2 }))
        );
        assert_eq!(app.pending_route, Some(Route::CourseDetail { course_id: 2 }));
        assert!(app.input.is_empty());
        assert!(!app.panel_open);
        assert!(app.results.is_empty());
        assert_eq!(rx.try_recv().map(|q| q.text).ok(), Some(String::new()));
    }

    #[test]
    /// What: A caller callback replaces default navigation.
    fn callback_replaces_navigation() {
        let seen: Arc<Mutex<Vec<u64>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let mut app = new_app().with_activation_callback(Box::new(move |r: &SearchResult| {
            sink.lock().expect("lock").push(r.id);
        }));
        app.input = "py".into();
        app.panel_open = true;
        let (tx, _rx) = mpsc::unbounded_channel();
        let out = activate(&mut app, &course(5, "c", None), &tx);
        assert_eq!(out, Activation::Delegated);
        assert_eq!(*seen.lock().expect("lock"), vec![5]);
        assert_eq!(app.pending_route, None);
        assert!(app.input.is_empty());
        assert!(!app.panel_open);
    }

    #[test]
    /// What: Module and content hits without `course_id` do not navigate but still reset the box.
    fn missing_course_id_is_ignored() {
        let (tx, _rx) = mpsc::unbounded_channel();
        for hit in [module(3, "m", None), content(4, "c", None)] {
            let mut app = new_app();
            app.input = "abc".into();
            app.panel_open = true;
            assert_eq!(activate(&mut app, &hit, &tx), Activation::Ignored);
            assert_eq!(app.pending_route, None);
            assert!(app.input.is_empty());
            assert!(!app.panel_open);
        }
    }

    #[test]
    fn content_navigates_to_its_course() {
        let mut app = new_app();
        let (tx, _rx) = mpsc::unbounded_channel();
        assert_eq!(
            activate(&mut app, &content(8, "quiz", Some(3)), &tx),
            Activation::Navigated(Route::CourseDetail { course_id: 3 })
        );
    }

    #[test]
    /// What: Enter is a no-op when unselected or when the list shrank under the index.
    fn enter_without_valid_selection_is_noop() {
        let mut app = new_app();
        app.input = "py".into();
        app.results = vec![course(1, "a", None)];
        let (tx, mut rx) = mpsc::unbounded_channel();
        assert_eq!(activate_selected(&mut app, &tx), None);
        app.selected = Some(4);
        assert_eq!(activate_selected(&mut app, &tx), None);
        app.category = Category::Module;
        app.selected = Some(0);
        assert_eq!(activate_selected(&mut app, &tx), None);
        assert_eq!(app.input, "py");
        assert!(rx.try_recv().is_err());
    }
}
