//! Project browser: filterable, searchable list with reveal animation.
//!
//! Rows fade in the first time they scroll into view (rendered dimmed until
//! revealed, then in full color permanently). The status line shows the
//! active category filter and search query, or the live search prompt while
//! search mode is active.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::portfolio::{Project, ProjectFilter};
use crate::theme::Theme;
use crate::tui::ui::truncate_to_width;

/// Everything the project list needs for one frame.
pub struct ProjectListView<'a> {
    /// All projects, in document order
    pub projects: &'a [Project],
    /// Indices of the projects passing the filter
    pub visible: &'a [usize],
    /// Selected position within `visible`
    pub selected: usize,
    /// First visible row (scroll offset into `visible`)
    pub scroll: usize,
    /// Per-project one-shot reveal flags, indexed like `projects`
    pub revealed: &'a [bool],
    /// Active filter state
    pub filter: &'a ProjectFilter,
    /// True while search mode is capturing keystrokes
    pub searching: bool,
}

/// Number of rows the list can show in `area` (minus the status line).
pub fn page_size(area: Rect) -> usize {
    area.height.saturating_sub(1) as usize
}

/// Render the projects section.
pub fn render(frame: &mut Frame, area: Rect, view: &ProjectListView, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(area);

    render_status_line(frame, chunks[0], view, theme);
    render_rows(frame, chunks[1], view, theme);
}

fn render_status_line(frame: &mut Frame, area: Rect, view: &ProjectListView, theme: &Theme) {
    let mut spans = Vec::new();

    if view.searching {
        spans.push(Span::styled("Search: ", theme.accent_style()));
        spans.push(Span::styled(view.filter.query.clone(), theme.text_style()));
        spans.push(Span::styled("_", theme.accent_style()));
    } else {
        spans.push(Span::styled(
            format!(
                "{} of {} projects",
                view.visible.len(),
                view.projects.len()
            ),
            theme.text_secondary_style(),
        ));
        if let Some(category) = &view.filter.category {
            spans.push(Span::styled("  category: ", theme.text_secondary_style()));
            spans.push(Span::styled(category.clone(), theme.accent_style()));
        }
        if !view.filter.query.trim().is_empty() {
            spans.push(Span::styled("  search: ", theme.text_secondary_style()));
            spans.push(Span::styled(view.filter.query.clone(), theme.accent_style()));
        }
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_rows(frame: &mut Frame, area: Rect, view: &ProjectListView, theme: &Theme) {
    if view.visible.is_empty() {
        let empty = Paragraph::new("No projects match the current filter.")
            .style(theme.text_secondary_style());
        frame.render_widget(empty, area);
        return;
    }

    let rows = area.height as usize;
    let width = area.width as usize;
    let mut lines = Vec::with_capacity(rows);

    for (pos, &project_idx) in view
        .visible
        .iter()
        .enumerate()
        .skip(view.scroll)
        .take(rows)
    {
        let project = &view.projects[project_idx];
        let selected = pos == view.selected;
        let revealed = view.revealed.get(project_idx).copied().unwrap_or(false);
        lines.push(project_row(project, selected, revealed, width, theme));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

/// A single project row: marker, title, category tag, truncated description.
fn project_row<'a>(
    project: &'a Project,
    selected: bool,
    revealed: bool,
    width: usize,
    theme: &Theme,
) -> Line<'a> {
    // Unrevealed rows render entirely dimmed until the reveal tick hits them
    if !revealed {
        let text = truncate_to_width(&project.title, width.saturating_sub(2));
        return Line::from(Span::styled(format!("  {}", text), theme.text_secondary_style()));
    }

    let marker = if selected { "▸ " } else { "  " };
    let title_style = if selected {
        theme.accent_bold_style()
    } else {
        theme.text_style()
    };

    let tag = format!(" [{}]", project.category);
    let used = 2 + UnicodeWidthStr::width(project.title.as_str()) + UnicodeWidthStr::width(tag.as_str());
    let remaining = width.saturating_sub(used + 2);
    let description = if remaining > 3 && !project.description.is_empty() {
        format!("  {}", truncate_to_width(&project.description, remaining))
    } else {
        String::new()
    };

    Line::from(vec![
        Span::styled(marker, theme.accent_style()),
        Span::styled(project.title.clone(), title_style),
        Span::styled(tag, theme.text_secondary_style()),
        Span::styled(description, theme.text_secondary_style()),
    ])
}
