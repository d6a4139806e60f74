//! Modal overlays: project detail, category picker, help, and notices.
//!
//! All modals render on top of the current section with a `Clear` behind
//! them, centered in the frame, in the teacher pattern of bordered
//! paragraphs with theme-accented borders.

use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::portfolio::Project;
use crate::theme::Theme;
use crate::tui::ui::centered_rect;

/// A transient message shown over the current section until dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Validation or loading problem
    Error(String),
    /// Positive confirmation (simulated form submission)
    Success(String),
}

/// Render the project detail modal.
pub fn render_project_modal(frame: &mut Frame, area: Rect, project: &Project, theme: &Theme) {
    let modal = centered_rect(area, 60, 14);
    frame.render_widget(Clear, modal);

    let mut lines = vec![
        Line::from(Span::styled(project.description.clone(), theme.text_style())),
        Line::default(),
        Line::from(vec![
            Span::styled("Category: ", theme.text_secondary_style()),
            Span::styled(project.category.clone(), theme.accent_style()),
        ]),
    ];
    if !project.tech.is_empty() {
        lines.push(Line::from(vec![
            Span::styled("Tech: ", theme.text_secondary_style()),
            Span::styled(project.tech.join(", "), theme.text_style()),
        ]));
    }
    if let Some(link) = &project.link {
        lines.push(Line::from(vec![
            Span::styled("Link: ", theme.text_secondary_style()),
            Span::styled(link.clone(), theme.accent_style()),
        ]));
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "Esc/Enter: close",
        theme.text_secondary_style(),
    )));

    let body = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.accent_style())
                .title(format!(" {} ", project.title)),
        );
    frame.render_widget(body, modal);
}

/// Render the category picker. `choices` includes the leading "All" entry.
pub fn render_category_modal(
    frame: &mut Frame,
    area: Rect,
    choices: &[String],
    selected: usize,
    theme: &Theme,
) {
    let height = (choices.len() as u16).saturating_add(2);
    let modal = centered_rect(area, 30, height);
    frame.render_widget(Clear, modal);

    let lines: Vec<Line> = choices
        .iter()
        .enumerate()
        .map(|(idx, choice)| {
            if idx == selected {
                Line::from(vec![
                    Span::styled("▸ ", theme.accent_style()),
                    Span::styled(choice.clone(), theme.accent_bold_style()),
                ])
            } else {
                Line::from(Span::styled(format!("  {}", choice), theme.text_style()))
            }
        })
        .collect();

    let body = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.accent_style())
            .title(" Filter by category "),
    );
    frame.render_widget(body, modal);
}

/// Render the help modal listing every keybinding.
pub fn render_help_modal(frame: &mut Frame, area: Rect, theme: &Theme) {
    let modal = centered_rect(area, 56, 18);
    frame.render_widget(Clear, modal);

    let entries: &[(&str, &str)] = &[
        ("Tab / 1 2 3", "switch section"),
        ("n", "toggle navigation bar"),
        ("j/k or ↓/↑", "select project"),
        ("Enter / o", "open project details"),
        ("/", "search projects"),
        ("f", "filter by category"),
        ("c", "clear filter and search"),
        ("?", "this help"),
        ("q / Esc", "quit"),
    ];

    let mut lines = vec![Line::default()];
    for (key, desc) in entries {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<14}", key), theme.accent_bold_style()),
            Span::styled((*desc).to_string(), theme.text_style()),
        ]));
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "  In the contact section keys type into the form; Esc leaves.",
        theme.text_secondary_style(),
    )));

    let body = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.accent_style())
                .title(" Help "),
        );
    frame.render_widget(body, modal);
}

/// Render a notice (error or success) as a small centered modal.
pub fn render_notice_modal(frame: &mut Frame, area: Rect, notice: &Notice, theme: &Theme) {
    let (title, border, text) = match notice {
        Notice::Error(text) => (" Problem ", theme.error_style(), text),
        Notice::Success(text) => (" Sent ", theme.success_style(), text),
    };

    let modal = centered_rect(area, 50, 7);
    frame.render_widget(Clear, modal);

    let body = Paragraph::new(vec![
        Line::default(),
        Line::from(Span::styled(text.to_string(), theme.text_style())),
        Line::default(),
        Line::from(Span::styled(
            "press any key to dismiss",
            theme.text_secondary_style(),
        )),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: false })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(title),
    );
    frame.render_widget(body, modal);
}
