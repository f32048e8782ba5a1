//! Results panel: loading, grouped results and empty states.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::logic::scroll_into_view;
use crate::state::AppState;
use crate::theme::{Theme, theme};

use super::rect4;

pub mod chips;
pub mod list;

/// Spinner frames advanced by the runtime tick.
const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Keyboard hint shown under the results.
pub const FOOTER_HINT: &str = "↑↓ naviguer · Entrée ouvrir · Tab catégorie · Échap fermer";

/// What the panel shows for the current state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelContent {
    /// A fetch for the latest query is in flight.
    Loading,
    /// Chips, groups and footer.
    Results,
    /// Non-blank term with an empty result set.
    NoResults,
    /// Blank term and not loading.
    Nothing,
}

/// What: Decide what the panel shows, in presenter priority order.
///
/// Details:
/// - Loading wins over everything, then a non-empty result set, then the
///   "no results" message for a non-blank term.
#[must_use]
pub fn panel_content(app: &AppState) -> PanelContent {
    if app.loading {
        PanelContent::Loading
    } else if !app.results.is_empty() {
        PanelContent::Results
    } else if !app.term_is_blank() {
        PanelContent::NoResults
    } else {
        PanelContent::Nothing
    }
}

/// Spinner glyph for an animation frame.
#[must_use]
pub fn spinner_glyph(frame: usize) -> &'static str {
    SPINNER[frame % SPINNER.len()]
}

/// Message shown when a non-blank term matched nothing.
#[must_use]
pub fn no_results_message(term: &str) -> String {
    format!("Aucun résultat pour \"{}\"", term.trim())
}

/// Bordered panel block.
fn panel_block(th: &Theme) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(th.surface1))
        .style(Style::default().fg(th.text).bg(th.mantle))
}

/// Top-aligned sub-rectangle of `area` with at most `height` rows.
fn top(area: Rect, height: u16) -> Rect {
    Rect {
        height: height.min(area.height),
        ..area
    }
}

/// What: Render the results panel under the input and record hit-test geometry.
///
/// Inputs:
/// - `f`: Frame to draw into.
/// - `app`: State; `panel_rect`, `chip_rects`, `row_rects`, `row_handles` and
///   `scroll` are updated.
/// - `area`: Space available below the input.
///
/// Details:
/// - The panel is only as tall as its content so clicks below it count as
///   "outside".
/// - Nothing is drawn (and no panel rectangle recorded) for a blank term.
pub fn render_panel(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = theme();
    match panel_content(app) {
        PanelContent::Nothing => {}
        PanelContent::Loading => {
            let line = Line::from(vec![
                Span::styled(
                    spinner_glyph(app.spinner_frame),
                    Style::default().fg(th.sapphire),
                ),
                Span::styled(" Recherche en cours...", Style::default().fg(th.subtext0)),
            ]);
            render_message(f, app, area, line, &th);
        }
        PanelContent::NoResults => {
            let line = Line::from(Span::styled(
                no_results_message(&app.input),
                Style::default().fg(th.subtext0),
            ));
            render_message(f, app, area, line, &th);
        }
        PanelContent::Results => render_results(f, app, area, &th),
    }
}

/// Single-line panel used by the loading and empty states.
fn render_message(f: &mut Frame, app: &mut AppState, area: Rect, line: Line<'static>, th: &Theme) {
    let panel = top(area, 3);
    f.render_widget(Clear, panel);
    f.render_widget(Paragraph::new(line).block(panel_block(th)), panel);
    app.panel_rect = Some(rect4(panel));
}

/// Chips, scrollable groups and footer.
fn render_results(f: &mut Frame, app: &mut AppState, area: Rect, th: &Theme) {
    let grouped = list::build_group_lines(&app.results, app.category, app.selected, th);
    let list_len = u16::try_from(grouped.lines.len()).unwrap_or(u16::MAX);
    let panel = top(area, list_len.saturating_add(5));
    f.render_widget(Clear, panel);
    let block = panel_block(th);
    let inner = block.inner(panel);
    f.render_widget(block, panel);
    app.panel_rect = Some(rect4(panel));

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(inner);
    let (chip_area, list_area, footer_area) = (rows[0], rows[2], rows[3]);

    let (chip_line, chip_layout) = chips::chip_line(app.category, th);
    f.render_widget(Paragraph::new(chip_line), chip_area);
    for (cat, offset, width) in chip_layout {
        if offset >= chip_area.width {
            break;
        }
        let w = width.min(chip_area.width - offset);
        app.chip_rects
            .push((cat, (chip_area.x + offset, chip_area.y, w, chip_area.height)));
    }

    let viewport = list_area.height;
    app.row_handles = grouped.handles;
    if let Some(handle) = app.selected.and_then(|i| app.row_handles.get(i).copied()) {
        app.scroll = scroll_into_view(app.scroll, handle, viewport);
    }
    app.scroll = app.scroll.min(list_len.saturating_sub(viewport));
    let scroll = app.scroll;
    f.render_widget(
        Paragraph::new(grouped.lines).scroll((scroll, 0)),
        list_area,
    );
    for (idx, h) in app.row_handles.iter().enumerate() {
        let start = h.line.max(scroll);
        let end = h
            .line
            .saturating_add(h.height)
            .min(scroll.saturating_add(viewport));
        if start < end {
            app.row_rects.push((
                idx,
                (list_area.x, list_area.y + (start - scroll), list_area.width, end - start),
            ));
        }
    }

    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            FOOTER_HINT,
            Style::default().fg(th.overlay1).add_modifier(Modifier::ITALIC),
        ))),
        footer_area,
    );
}
