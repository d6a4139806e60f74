//! Home section: name, title, the animated typed line, and the summary.
//!
//! The typed line is built from the display surface's parts, so the caret
//! span is always the last element of the line regardless of the prefix
//! currently rendered.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::animator::TextSurface;
use crate::portfolio::Portfolio;
use crate::theme::Theme;

/// Render the hero section.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    portfolio: &Portfolio,
    surface: &TextSurface,
    animated: bool,
    theme: &Theme,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // name
            Constraint::Length(1), // title
            Constraint::Length(2), // typed line
            Constraint::Min(1),    // summary
        ])
        .split(area);

    let name = Paragraph::new(Line::from(Span::styled(
        portfolio.name.clone(),
        theme
            .accent_bold_style()
            .add_modifier(Modifier::UNDERLINED),
    )));
    frame.render_widget(name, chunks[0]);

    let title = Paragraph::new(Line::from(Span::styled(
        portfolio.title.clone(),
        theme.text_style(),
    )));
    frame.render_widget(title, chunks[1]);

    frame.render_widget(typed_line(surface, animated, theme), chunks[2]);

    let summary = Paragraph::new(portfolio.summary.clone())
        .style(theme.text_secondary_style())
        .wrap(Wrap { trim: true });
    frame.render_widget(summary, chunks[3]);
}

/// The typed line: rendered prefix followed by the caret.
///
/// When the animator is disabled (empty phrase list) the line is left
/// blank, caret included — nothing animates.
fn typed_line<'a>(surface: &'a TextSurface, animated: bool, theme: &Theme) -> Paragraph<'a> {
    if !animated {
        return Paragraph::new(Line::default());
    }
    let (text, caret) = surface.parts();
    Paragraph::new(Line::from(vec![
        Span::styled(text, theme.text_style()),
        Span::styled(caret, theme.accent_bold_style()),
    ]))
}
