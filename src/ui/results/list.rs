//! Line builders for result rows and group headers.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use crate::logic::partition;
use crate::state::{Category, ResultDetail, ResultKind, RowHandle, SearchResult};
use crate::theme::Theme;

/// Header of the course group.
pub const COURSES_HEADER: &str = "Formations";
/// Header of the module group.
pub const MODULES_HEADER: &str = "Modules";

/// Lines of the scrollable group region plus the row handle of every visible row.
#[derive(Debug, Default)]
pub struct GroupedLines {
    /// Rendered lines, headers included.
    pub lines: Vec<Line<'static>>,
    /// Row handles indexed by flattened visible index.
    pub handles: Vec<RowHandle>,
}

/// Counted noun with a naive French plural.
fn counted(n: u32, singular: &str, plural: &str) -> String {
    if n == 1 {
        format!("1 {singular}")
    } else {
        format!("{n} {plural}")
    }
}

/// What: Build the secondary text shown under a row title.
///
/// Inputs:
/// - `result`: Row to describe.
///
/// Output:
/// - Parts joined with ` · `.
///
/// Details:
/// - Courses show their module count and modules their element count; a
///   missing count displays as 0.
/// - Status label and creator follow when present.
#[must_use]
pub fn secondary_text(result: &SearchResult) -> String {
    let mut parts: Vec<String> = Vec::new();
    match &result.detail {
        ResultDetail::Course { module_count } => {
            parts.push(counted(module_count.unwrap_or(0), "module", "modules"));
        }
        ResultDetail::Module {
            course_title,
            element_count,
            ..
        } => {
            parts.push(counted(element_count.unwrap_or(0), "élément", "éléments"));
            if let Some(t) = course_title.as_deref().filter(|t| !t.is_empty()) {
                parts.push(t.to_string());
            }
        }
        ResultDetail::Content {
            content_type,
            module_title,
            ..
        } => {
            parts.extend(
                [content_type, module_title]
                    .into_iter()
                    .flatten()
                    .filter(|s| !s.is_empty())
                    .cloned(),
            );
        }
    }
    if let Some(status) = result.status_display.as_deref().filter(|s| !s.is_empty()) {
        parts.push(status.to_string());
    }
    if let Some(creator) = result.creator.as_deref().filter(|s| !s.is_empty()) {
        parts.push(format!("par {creator}"));
    }
    parts.join(" · ")
}

/// Badge color for a result kind.
const fn badge_color(kind: ResultKind, th: &Theme) -> Color {
    match kind {
        ResultKind::Course => th.green,
        ResultKind::Module => th.yellow,
        ResultKind::Content => th.lavender,
    }
}

/// What: Build the two lines of one result row.
///
/// Inputs:
/// - `result`: Row to render.
/// - `selected`: Whether the row holds the selection.
/// - `th`: Palette.
///
/// Output:
/// - Title line (marker, badge, title) and secondary line.
#[must_use]
pub fn row_lines(result: &SearchResult, selected: bool, th: &Theme) -> [Line<'static>; 2] {
    let kind = result.kind();
    let row_style = if selected {
        Style::default().bg(th.surface1)
    } else {
        Style::default()
    };
    let marker = if selected { "› " } else { "  " };
    let title = Line::from(vec![
        Span::styled(marker, Style::default().fg(th.sapphire)),
        Span::styled(
            format!(" {} ", kind.badge()),
            Style::default()
                .fg(th.crust)
                .bg(badge_color(kind, th))
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(
            result.title.clone(),
            Style::default().fg(th.text).add_modifier(Modifier::BOLD),
        ),
    ])
    .style(row_style);
    let secondary = Line::from(vec![
        Span::raw("    "),
        Span::styled(secondary_text(result), Style::default().fg(th.subtext0)),
    ])
    .style(row_style);
    [title, secondary]
}

/// Group header line.
fn header_line(label: &str, count: usize, th: &Theme) -> Line<'static> {
    Line::from(Span::styled(
        format!("{label} ({count})"),
        Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
    ))
}

/// What: Build the grouped result region.
///
/// Inputs:
/// - `results`: Result set in server order.
/// - `category`: Active chip; hides the groups it excludes.
/// - `selected`: Selection index into the flattened visible list.
/// - `th`: Palette.
///
/// Output:
/// - Lines with a "Formations" then a "Modules" header, each only when the
///   group is non-empty and allowed, and one handle per visible row.
///
/// Details:
/// - Handle order matches the flattened visible list, so `handles[i]` is the
///   row the keyboard reaches at index `i`.
#[must_use]
pub fn build_group_lines(
    results: &[SearchResult],
    category: Category,
    selected: Option<usize>,
    th: &Theme,
) -> GroupedLines {
    let parts = partition(results);
    let mut out = GroupedLines::default();
    let groups = [
        (COURSES_HEADER, &parts.courses, category.shows_courses()),
        (MODULES_HEADER, &parts.modules, category.shows_modules()),
    ];
    for (label, rows, allowed) in groups {
        if !allowed || rows.is_empty() {
            continue;
        }
        out.lines.push(header_line(label, rows.len(), th));
        for r in rows {
            let idx = out.handles.len();
            let line = u16::try_from(out.lines.len()).unwrap_or(u16::MAX);
            out.handles.push(RowHandle { line, height: 2 });
            out.lines
                .extend(row_lines(r, selected == Some(idx), th));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{content, course, module};

    /// Plain text of a line.
    fn text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    /// What: Missing counts fall back to 0; status and creator are appended.
    fn secondary_text_fallbacks() {
        let mut c = course(1, "Intro to Python", None);
        assert_eq!(secondary_text(&c), "0 modules");
        c.detail = ResultDetail::Course {
            module_count: Some(1),
        };
        c.status_display = Some("Publié".into());
        c.creator = Some("alice".into());
        assert_eq!(secondary_text(&c), "1 module · Publié · par alice");

        let m = module(10, "Variables", Some(1));
        assert_eq!(secondary_text(&m), "0 éléments");
    }

    #[test]
    /// What: Courses precede modules and handles point at each row's title line.
    ///
    /// Inputs:
    /// - Server order: module, course, content, module.
    ///
    /// Output:
    /// - Eight lines: header, course (2), header, module (2), module (2); content hidden.
    fn groups_are_ordered_and_handles_recorded() {
        let th = Theme::default();
        let results = vec![
            module(10, "Variables", Some(1)),
            course(1, "Intro to Python", Some(4)),
            content(100, "Quiz", Some(1)),
            module(11, "Loops", Some(1)),
        ];
        let g = build_group_lines(&results, Category::All, Some(1), &th);
        assert_eq!(g.lines.len(), 8);
        assert_eq!(text(&g.lines[0]), "Formations (1)");
        assert_eq!(text(&g.lines[3]), "Modules (2)");
        assert_eq!(
            g.handles,
            vec![
                RowHandle { line: 1, height: 2 },
                RowHandle { line: 4, height: 2 },
                RowHandle { line: 6, height: 2 },
            ]
        );
        assert!(text(&g.lines[4]).starts_with("› "));
        assert!(text(&g.lines[4]).contains("Variables"));
        assert!(text(&g.lines[1]).contains(" COURS "));
    }

    #[test]
    /// What: The module chip hides the course group entirely.
    fn category_hides_group() {
        let th = Theme::default();
        let results = vec![course(1, "Intro", None), module(10, "Variables", Some(1))];
        let g = build_group_lines(&results, Category::Module, None, &th);
        assert_eq!(text(&g.lines[0]), "Modules (1)");
        assert_eq!(g.handles, vec![RowHandle { line: 1, height: 2 }]);
    }
}
