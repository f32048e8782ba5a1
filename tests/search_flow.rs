//! End-to-end search flow: key events, debounced worker, event handler and activation.
//!
//! Runs on a paused tokio clock so debounce windows and slow replies are
//! deterministic.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyModifiers};
use futures::future::BoxFuture;
use serde_json::{Value, json};
use tokio::sync::mpsc;

use lms_search::app::{SearchWorkerConfig, handle_search_event, spawn_search_worker};
use lms_search::events::handle_event;
use lms_search::sources::{JsonClient, Result};
use lms_search::state::{AppState, QueryInput, Route, SearchBoxConfig, SearchEvent};

/// Fake LMS backend answering by term, with an optional delay per term.
#[derive(Default)]
struct FakeLms {
    /// `(delay, body)` per `q` value.
    replies: HashMap<String, (Duration, Value)>,
    /// `q` values in request order.
    seen: Mutex<Vec<String>>,
}

impl FakeLms {
    fn reply(mut self, term: &str, delay: Duration, body: Value) -> Self {
        self.replies.insert(term.to_string(), (delay, body));
        self
    }

    fn seen(&self) -> Vec<String> {
        self.seen.lock().expect("seen lock").clone()
    }
}

impl JsonClient for FakeLms {
    fn get_json(&self, path: String, params: Vec<(String, String)>) -> BoxFuture<'_, Result<Value>> {
        assert_eq!(path, "/api/search/");
        let term = params
            .iter()
            .find(|(k, _)| k == "q")
            .map(|(_, v)| v.clone())
            .unwrap_or_default();
        self.seen.lock().expect("seen lock").push(term.clone());
        let (delay, body) = self
            .replies
            .get(&term)
            .cloned()
            .unwrap_or((Duration::ZERO, json!({"results": []})));
        Box::pin(async move {
            tokio::time::sleep(delay).await;
            Ok(body)
        })
    }
}

/// Key press event without modifiers.
fn key(code: KeyCode) -> CEvent {
    CEvent::Key(KeyEvent::new(code, KeyModifiers::empty()))
}

/// Type `text` into the box.
fn type_text(app: &mut AppState, qtx: &mpsc::UnboundedSender<QueryInput>, text: &str) {
    for ch in text.chars() {
        assert!(!handle_event(&key(KeyCode::Char(ch)), app, qtx));
    }
}

/// Wiring of one mounted search box.
struct Harness {
    app: AppState,
    qtx: mpsc::UnboundedSender<QueryInput>,
    erx: mpsc::UnboundedReceiver<SearchEvent>,
    _worker: lms_search::app::SearchWorker,
}

fn mount(client: Arc<FakeLms>) -> Harness {
    let (qtx, qrx) = mpsc::unbounded_channel();
    let (etx, erx) = mpsc::unbounded_channel();
    let worker = spawn_search_worker(
        qrx,
        etx,
        client,
        SearchWorkerConfig {
            debounce: Duration::from_millis(300),
            limit: 20,
        },
    );
    let app = AppState::new(SearchBoxConfig {
        auto_focus: true,
        ..SearchBoxConfig::default()
    });
    Harness {
        app,
        qtx,
        erx,
        _worker: worker,
    }
}

/// Apply worker events until `completions` replies have been handled.
async fn pump(h: &mut Harness, completions: usize) {
    let mut done = 0;
    while done < completions {
        let ev = h.erx.recv().await.expect("worker alive");
        if !matches!(ev, SearchEvent::Dispatched { .. }) {
            done += 1;
        }
        handle_search_event(&mut h.app, ev);
    }
}

#[tokio::test(start_paused = true)]
/// What: Type a term, arrow down twice, press Enter.
///
/// Inputs:
/// - Server answers `python` with one course then one of its modules.
///
/// Output:
/// - One request for the whole burst; Enter on the module navigates to its
///   parent course, clears the term and closes the panel.
async fn type_navigate_and_activate() {
    let client = Arc::new(FakeLms::default().reply(
        "python",
        Duration::from_millis(40),
        json!({"results": [
            {"type": "course", "id": 1, "title": "Intro to Python", "module_count": 4},
            {"type": "module", "id": 7, "title": "Variables", "course_id": 1}
        ]}),
    ));
    let mut h = mount(Arc::clone(&client));

    type_text(&mut h.app, &h.qtx, "python");
    let first = h.erx.recv().await.expect("dispatch");
    assert!(matches!(first, SearchEvent::Dispatched { .. }));
    handle_search_event(&mut h.app, first);
    assert!(h.app.loading);
    pump(&mut h, 1).await;

    assert_eq!(client.seen(), vec!["python".to_string()]);
    assert!(!h.app.loading);
    assert_eq!(h.app.results.len(), 2);

    handle_event(&key(KeyCode::Down), &mut h.app, &h.qtx);
    handle_event(&key(KeyCode::Down), &mut h.app, &h.qtx);
    assert_eq!(h.app.selected, Some(1));
    handle_event(&key(KeyCode::Enter), &mut h.app, &h.qtx);

    assert_eq!(h.app.pending_route, Some(Route::CourseDetail { course_id: 1 }));
    assert_eq!(
        h.app.pending_route.map(|r| r.path()).as_deref(),
        Some("/courses/1")
    );
    assert!(h.app.input.is_empty());
    assert!(!h.app.panel_open);
    assert!(h.app.results.is_empty());

    tokio::time::sleep(Duration::from_secs(1)).await;
    assert_eq!(client.seen().len(), 1, "cleared term is never fetched");
}

#[tokio::test(start_paused = true)]
/// What: A slow reply for an earlier term never replaces a fresher result set.
///
/// Inputs:
/// - `py` answers after 1s, `pyt` immediately; `t` is typed after `py` was dispatched.
///
/// Output:
/// - Both requests are made; the final results are those of `pyt`.
async fn slow_stale_reply_is_discarded() {
    let client = Arc::new(
        FakeLms::default()
            .reply(
                "py",
                Duration::from_secs(1),
                json!({"results": [{"type": "course", "id": 1, "title": "Stale"}]}),
            )
            .reply(
                "pyt",
                Duration::ZERO,
                json!({"results": [{"type": "course", "id": 2, "title": "Fresh"}]}),
            ),
    );
    let mut h = mount(Arc::clone(&client));

    type_text(&mut h.app, &h.qtx, "py");
    tokio::time::sleep(Duration::from_millis(350)).await;
    type_text(&mut h.app, &h.qtx, "t");
    pump(&mut h, 2).await;

    assert_eq!(client.seen(), vec!["py".to_string(), "pyt".to_string()]);
    assert_eq!(h.app.results.len(), 1);
    assert_eq!(h.app.results[0].title, "Fresh");
    assert!(!h.app.loading);
}

#[tokio::test(start_paused = true)]
/// What: Escape keeps the term; typing again refocuses and re-queries.
async fn escape_then_resume_typing() {
    let client = Arc::new(FakeLms::default());
    let mut h = mount(Arc::clone(&client));

    type_text(&mut h.app, &h.qtx, "ja");
    assert!(!handle_event(&key(KeyCode::Esc), &mut h.app, &h.qtx));
    assert!(!h.app.panel_open);
    assert_eq!(h.app.input, "ja");

    type_text(&mut h.app, &h.qtx, "va");
    assert!(h.app.panel_open);
    pump(&mut h, 1).await;
    assert_eq!(client.seen(), vec!["java".to_string()]);
    assert!(h.app.results.is_empty());
}
