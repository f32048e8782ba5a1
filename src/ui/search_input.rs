use ratatui::{
    Frame,
    layout::Rect,
    prelude::Position,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::state::AppState;
use crate::theme::theme;

/// What: Render the search input box and record its rectangle.
///
/// Inputs:
/// - `f`: Frame to draw into.
/// - `app`: State providing the term, placeholder, focus and style hook.
/// - `area`: Rectangle for the box, borders included.
///
/// Details:
/// - The placeholder is shown only while the term is empty.
/// - The caller style hook is patched over the default border and text styles.
/// - The terminal cursor is placed after the term while the input is focused.
pub(super) fn render_input(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = theme();
    let focused = app.input_focused;
    let hook = app.config.style.unwrap_or_default();

    let prompt = Span::styled(
        "> ",
        Style::default().fg(if focused { th.sapphire } else { th.overlay1 }),
    );
    let body = if app.input.is_empty() {
        Span::styled(
            app.config.placeholder.clone(),
            Style::default().fg(th.overlay1),
        )
    } else {
        Span::styled(
            app.input.clone(),
            Style::default()
                .fg(if focused { th.text } else { th.subtext0 })
                .patch(hook),
        )
    };
    let block = Block::default()
        .title(Span::styled(" Recherche ", Style::default().fg(th.overlay1)))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(
            Style::default()
                .fg(if focused { th.sapphire } else { th.surface1 })
                .patch(hook),
        );
    let input = Paragraph::new(Line::from(vec![prompt, body]))
        .style(Style::default().fg(th.text).bg(th.base))
        .block(block);
    f.render_widget(input, area);
    app.input_rect = Some(super::rect4(area));

    if focused && area.width > 2 && area.height > 2 {
        let typed = u16::try_from(app.input.width()).unwrap_or(u16::MAX);
        let right = area.x + area.width - 2;
        let x = (area.x + 3).saturating_add(typed).min(right);
        f.set_cursor_position(Position::new(x, area.y + 1));
    }
}
