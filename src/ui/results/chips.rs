use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

use crate::state::Category;
use crate::theme::Theme;

/// What: Build the category chip bar.
///
/// Inputs:
/// - `active`: Currently active category.
/// - `th`: Palette.
///
/// Output:
/// - The chip line and, per chip, its column offset and width within the line.
///
/// Details:
/// - The active chip is drawn filled; the others are muted.
#[must_use]
pub fn chip_line(active: Category, th: &Theme) -> (Line<'static>, Vec<(Category, u16, u16)>) {
    let mut spans = Vec::with_capacity(Category::ALL.len() * 2);
    let mut layout = Vec::with_capacity(Category::ALL.len());
    let mut x: u16 = 0;
    for (i, cat) in Category::ALL.iter().copied().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
            x = x.saturating_add(1);
        }
        let label = format!(" {} ", cat.label());
        let w = u16::try_from(label.width()).unwrap_or(u16::MAX);
        let style = if cat == active {
            Style::default()
                .fg(th.crust)
                .bg(th.sapphire)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(th.subtext0).bg(th.mantle)
        };
        spans.push(Span::styled(label, style));
        layout.push((cat, x, w));
        x = x.saturating_add(w);
    }
    (Line::from(spans), layout)
}
