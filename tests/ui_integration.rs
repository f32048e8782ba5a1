//! Integration tests for UI rendering using ratatui's `TestBackend`.
//!
//! These tests verify what the presenter draws for each panel state and the
//! geometry it records for mouse hit-testing.

use ratatui::{Terminal, backend::TestBackend};
use serde_json::json;

use lms_search::sources::parse_results;
use lms_search::state::{AppState, Category, RowHandle, SearchBoxConfig, SearchResult};
use lms_search::ui::ui;

/// What: Render one frame of `app` into a fresh test terminal.
///
/// Output:
/// - The terminal, so the caller can inspect its buffer.
fn render(app: &mut AppState, width: u16, height: u16) -> Terminal<TestBackend> {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).expect("terminal");
    terminal.draw(|f| ui(f, app)).expect("draw");
    terminal
}

/// Buffer contents as text, one line per row.
fn screen(terminal: &Terminal<TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    let mut out = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

/// Focused app showing the given results for `term`.
fn app_with(term: &str, results: Vec<SearchResult>) -> AppState {
    let mut app = AppState::new(SearchBoxConfig {
        auto_focus: true,
        ..SearchBoxConfig::default()
    });
    app.input = term.to_string();
    app.results = results;
    app
}

/// One course with four modules and one of its modules.
fn python_results() -> Vec<SearchResult> {
    parse_results(&json!({
        "results": [
            {"type": "module", "id": 10, "title": "Variables", "course_id": 1,
             "course_title": "Intro to Python", "element_count": 3},
            {"type": "course", "id": 1, "title": "Intro to Python", "module_count": 4,
             "status_display": "Publié", "creator": "alice"}
        ]
    }))
}

#[test]
/// What: Grouped results render chips, both groups in order, and the footer.
///
/// Output:
/// - "Formations" group above "Modules" group with counts on the secondary lines;
///   chip, row and panel rectangles recorded.
fn renders_grouped_results() {
    let mut app = app_with("python", python_results());
    let terminal = render(&mut app, 80, 24);
    let text = screen(&terminal);

    assert!(text.contains("Tout"));
    assert!(text.contains("Formations (1)"));
    assert!(text.contains("Intro to Python"));
    assert!(text.contains("4 modules · Publié · par alice"));
    assert!(text.contains("Modules (1)"));
    assert!(text.contains("Variables"));
    assert!(text.contains("3 éléments"));
    assert!(text.contains("naviguer"));
    let courses_at = text.find("Formations (1)").expect("course header");
    let modules_at = text.find("Modules (1)").expect("module header");
    assert!(courses_at < modules_at);

    assert!(app.input_rect.is_some());
    assert!(app.panel_rect.is_some());
    assert_eq!(app.chip_rects.len(), 3);
    assert_eq!(app.row_rects.len(), 2);
    assert_eq!(app.row_handles.len(), 2);
}

#[test]
/// What: The module chip hides the course group but keeps the chip bar.
fn module_category_hides_courses() {
    let mut app = app_with("python", python_results());
    app.category = Category::Module;
    let text = screen(&render(&mut app, 80, 24));
    assert!(!text.contains("Formations (1)"));
    assert!(!text.contains(" COURS "));
    assert!(text.contains("Variables"));
    assert_eq!(app.row_rects.len(), 1);
}

#[test]
/// What: A non-blank term with no results shows the empty message.
fn renders_no_results_message() {
    let mut app = app_with("zz", Vec::new());
    let text = screen(&render(&mut app, 80, 24));
    assert!(text.contains("Aucun résultat pour \"zz\""));
    assert!(!text.contains("naviguer"));
    assert!(app.chip_rects.is_empty());
}

#[test]
/// What: Loading shows the spinner line even when older results exist.
fn renders_loading_over_results() {
    let mut app = app_with("python", python_results());
    app.loading = true;
    let text = screen(&render(&mut app, 80, 24));
    assert!(text.contains("Recherche en cours"));
    assert!(!text.contains("Intro to Python"));
    assert!(app.row_rects.is_empty());
}

#[test]
/// What: A blank term renders only the input with its placeholder.
fn blank_term_renders_nothing_below_input() {
    let mut app = app_with("", Vec::new());
    let text = screen(&render(&mut app, 80, 24));
    assert!(text.contains("Rechercher une formation"));
    assert!(app.panel_rect.is_none());
}

#[test]
/// What: The selected row is scrolled into view in a short terminal.
///
/// Inputs:
/// - Ten courses, selection on the last one, 12-row terminal (4 list rows).
///
/// Output:
/// - Scroll offset moves past the top rows and the last row gets a hit rectangle.
fn selected_row_is_scrolled_into_view() {
    let rows: Vec<serde_json::Value> = (0..10)
        .map(|i| json!({"type": "course", "id": i + 1, "title": format!("Course {i}")}))
        .collect();
    let mut app = app_with("course", parse_results(&json!({ "results": rows })));
    app.selected = Some(9);
    let text = screen(&render(&mut app, 60, 12));

    assert_eq!(app.row_handles.len(), 10);
    assert_eq!(app.row_handles[9], RowHandle { line: 19, height: 2 });
    assert_eq!(app.scroll, 17);
    assert!(text.contains("Course 9"));
    assert!(!text.contains("Course 0"));
    assert!(app.row_rects.iter().any(|(idx, _)| *idx == 9));
    assert!(app.row_rects.iter().all(|(idx, _)| *idx >= 8));
}
