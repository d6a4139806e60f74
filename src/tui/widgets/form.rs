//! Contact form: field state, validation, and rendering.
//!
//! Submission is simulated. Validation rejects the form when any field is
//! empty after trimming; success reports a confirmation naming the sender
//! and resets every field.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::portfolio::ContactInfo;
use crate::theme::Theme;

/// The three form fields, in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Name,
    Email,
    Message,
}

impl FormField {
    /// Field label shown on the block border.
    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Email => "Email",
            FormField::Message => "Message",
        }
    }

    fn next(self) -> Self {
        match self {
            FormField::Name => FormField::Email,
            FormField::Email => FormField::Message,
            FormField::Message => FormField::Name,
        }
    }

    fn prev(self) -> Self {
        match self {
            FormField::Name => FormField::Message,
            FormField::Email => FormField::Name,
            FormField::Message => FormField::Email,
        }
    }
}

/// Contact form state.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    pub focus: FormField,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move focus to the next field, wrapping around.
    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    /// Move focus to the previous field, wrapping around.
    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// The currently focused field's content.
    pub fn focused_value(&self) -> &str {
        match self.focus {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Message => &self.message,
        }
    }

    fn focused_value_mut(&mut self) -> &mut String {
        match self.focus {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Message => &mut self.message,
        }
    }

    /// Append a character to the focused field.
    pub fn insert(&mut self, ch: char) {
        self.focused_value_mut().push(ch);
    }

    /// Remove the last character of the focused field.
    pub fn backspace(&mut self) {
        self.focused_value_mut().pop();
    }

    /// Attempt submission.
    ///
    /// Fails when any field is empty after trimming. On success returns the
    /// confirmation message and resets the form.
    pub fn submit(&mut self) -> Result<String, String> {
        let name = self.name.trim();
        if name.is_empty() || self.email.trim().is_empty() || self.message.trim().is_empty() {
            return Err("Please fill in every field before sending.".to_string());
        }
        let confirmation = format!("Thanks, {}! Your message has been sent (simulated).", name);
        *self = Self::default();
        Ok(confirmation)
    }
}

/// Render the contact section: intro line, optional contact details, and
/// the three form fields with the focused one highlighted.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    form: &ContactForm,
    contact: &ContactInfo,
    theme: &Theme,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // intro + contact details
            Constraint::Length(3), // name
            Constraint::Length(3), // email
            Constraint::Min(3),    // message
        ])
        .split(area);

    let mut intro = vec![Line::from(Span::styled(
        "Get in touch — fill in the form and press Enter to send.",
        theme.text_style(),
    ))];
    let mut details = Vec::new();
    if let Some(email) = &contact.email {
        details.push(Span::styled(email.clone(), theme.accent_style()));
    }
    if let Some(location) = &contact.location {
        if !details.is_empty() {
            details.push(Span::styled(" · ", theme.text_secondary_style()));
        }
        details.push(Span::styled(location.clone(), theme.text_secondary_style()));
    }
    if !details.is_empty() {
        intro.push(Line::from(details));
    }
    frame.render_widget(Paragraph::new(intro), chunks[0]);

    render_field(frame, chunks[1], form, FormField::Name, &form.name, theme);
    render_field(frame, chunks[2], form, FormField::Email, &form.email, theme);
    render_field(frame, chunks[3], form, FormField::Message, &form.message, theme);
}

fn render_field(
    frame: &mut Frame,
    area: Rect,
    form: &ContactForm,
    field: FormField,
    value: &str,
    theme: &Theme,
) {
    let focused = form.focus == field;
    let border_style = if focused {
        theme.accent_style()
    } else {
        theme.text_secondary_style()
    };

    // Show an input cursor on the focused field
    let shown = if focused {
        format!("{}_", value)
    } else {
        value.to_string()
    };

    let input = Paragraph::new(shown)
        .style(Style::default().fg(theme.text_primary))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(format!(" {} ", field.label())),
        );
    frame.render_widget(input, area);
}
