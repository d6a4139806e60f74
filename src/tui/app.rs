//! Viewer application: state, event loop, and input handling.
//!
//! Single-threaded and tick-driven: every pass through the loop updates the
//! typing animator and the reveal effect, redraws, then waits for input with
//! a timeout bounded by whatever is due next. No work blocks; timers are
//! checked against `Instant::now()` on each pass.

use std::time::{Duration, Instant};

use anyhow::Result;
use chrono::Datelike;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame, Terminal,
};
use tracing::debug;

use crate::animator::{AnimatorDriver, RandomJitter, TextSurface, TypingAnimator};
use crate::portfolio::{Portfolio, ProjectFilter};
use crate::theme::Theme;

use super::widgets::modal::{self, Notice};
use super::widgets::projects::{self, ProjectListView};
use super::widgets::{form, hero, ContactForm};

/// Caret marker kept at the end of the typed line.
const CARET: &str = "▌";

/// Interval between one-shot row reveals in the projects section.
const REVEAL_INTERVAL: Duration = Duration::from_millis(80);

/// Top-level page sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Home,
    Projects,
    Contact,
}

impl Section {
    const ALL: [Section; 3] = [Section::Home, Section::Projects, Section::Contact];

    pub fn title(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Projects => "Projects",
            Section::Contact => "Contact",
        }
    }

    fn next(self) -> Self {
        match self {
            Section::Home => Section::Projects,
            Section::Projects => Section::Contact,
            Section::Contact => Section::Home,
        }
    }

    fn prev(self) -> Self {
        match self {
            Section::Home => Section::Contact,
            Section::Projects => Section::Home,
            Section::Contact => Section::Projects,
        }
    }
}

/// UI mode. Everything other than `Normal` is an overlay on the current
/// section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Normal,
    /// Typing filters the project list live
    Search,
    /// Picking a category from the list of those present
    CategoryFilter,
    /// Project detail modal
    ProjectDetail,
    /// Keybinding help
    Help,
}

/// Portfolio viewer application state.
pub struct App {
    portfolio: Portfolio,
    theme: Theme,
    tick_rate: Duration,

    section: Section,
    mode: Mode,
    nav_visible: bool,
    notice: Option<Notice>,
    should_quit: bool,

    // Project browser
    filter: ProjectFilter,
    visible: Vec<usize>,
    selected: usize,
    scroll: usize,
    page_size: usize,
    revealed: Vec<bool>,
    categories: Vec<String>,
    category_idx: usize,
    reveal_due: Instant,

    // Contact form
    form: ContactForm,

    // Typing animation; `driver` is None when the phrase list is empty
    surface: TextSurface,
    driver: Option<AnimatorDriver>,
}

impl App {
    pub fn new(portfolio: Portfolio, theme: Theme, tick_rate: Duration) -> Self {
        let now = Instant::now();
        let driver = TypingAnimator::new(portfolio.phrases.clone())
            .map(|animator| AnimatorDriver::start(animator, Box::new(RandomJitter), now));
        if driver.is_none() {
            debug!("phrase list empty, typing animation disabled");
        }

        let categories = portfolio.categories();
        let visible = ProjectFilter::default().apply(&portfolio.projects);
        let revealed = vec![false; portfolio.projects.len()];

        Self {
            portfolio,
            theme,
            tick_rate,
            section: Section::Home,
            mode: Mode::Normal,
            nav_visible: true,
            notice: None,
            should_quit: false,
            filter: ProjectFilter::default(),
            visible,
            selected: 0,
            scroll: 0,
            page_size: 0,
            revealed,
            categories,
            category_idx: 0,
            reveal_due: now + REVEAL_INTERVAL,
            form: ContactForm::new(),
            surface: TextSurface::new(CARET),
            driver,
        }
    }

    /// Main loop: update timers, draw, wait for input.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        while !self.should_quit {
            self.update(Instant::now());
            terminal.draw(|frame| self.draw(frame))?;

            let timeout = self.poll_timeout(Instant::now());
            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
                    // Resize is picked up by the next draw
                    _ => {}
                }
            }
        }
        Ok(())
    }

    /// Advance the typing animation and the reveal effect to `now`.
    fn update(&mut self, now: Instant) {
        if let Some(driver) = &mut self.driver {
            driver.poll(now, &mut self.surface);
        }

        if self.section == Section::Projects && now >= self.reveal_due {
            self.reveal_next();
            self.reveal_due = now + REVEAL_INTERVAL;
        }
    }

    /// Mark the first viewport row that has not been revealed yet.
    fn reveal_next(&mut self) {
        let in_view = self
            .visible
            .iter()
            .skip(self.scroll)
            .take(self.page_size.max(1));
        for &project_idx in in_view {
            if !self.revealed[project_idx] {
                self.revealed[project_idx] = true;
                return;
            }
        }
    }

    /// Poll timeout: the tick rate, shortened when an animator step or a
    /// reveal is due sooner.
    fn poll_timeout(&self, now: Instant) -> Duration {
        let mut timeout = self.tick_rate;
        if let Some(driver) = &self.driver {
            timeout = timeout.min(driver.time_until_due(now));
        }
        if self.section == Section::Projects {
            timeout = timeout.min(self.reveal_due.saturating_duration_since(now));
        }
        timeout
    }

    // --- Input ---

    fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        // A visible notice swallows the next keypress
        if self.notice.take().is_some() {
            return;
        }

        match self.mode {
            Mode::Help => self.mode = Mode::Normal, // any key closes help
            Mode::Search => self.handle_search_key(key),
            Mode::CategoryFilter => self.handle_category_key(key),
            Mode::ProjectDetail => self.handle_detail_key(key),
            Mode::Normal => self.handle_normal_key(key),
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => self.mode = Mode::Normal,
            KeyCode::Backspace => {
                self.filter.query.pop();
                self.apply_filter();
            }
            KeyCode::Char(ch) => {
                self.filter.query.push(ch);
                self.apply_filter();
            }
            _ => {}
        }
    }

    fn handle_category_key(&mut self, key: KeyEvent) {
        let last = self.categories.len(); // choices = "All" + categories
        match key.code {
            KeyCode::Esc => self.mode = Mode::Normal,
            KeyCode::Up | KeyCode::Char('k') => {
                self.category_idx = self.category_idx.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.category_idx = (self.category_idx + 1).min(last);
            }
            KeyCode::Enter => {
                self.filter.category = if self.category_idx == 0 {
                    None
                } else {
                    Some(self.categories[self.category_idx - 1].clone())
                };
                debug!(category = ?self.filter.category, "category filter applied");
                self.apply_filter();
                self.mode = Mode::Normal;
            }
            _ => {}
        }
    }

    fn handle_detail_key(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q')) {
            self.mode = Mode::Normal;
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) {
        if self.section == Section::Contact {
            self.handle_form_key(key);
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('?') => self.mode = Mode::Help,
            KeyCode::Tab => self.switch_section(self.section.next()),
            KeyCode::BackTab => self.switch_section(self.section.prev()),
            KeyCode::Char('1') => self.switch_section(Section::Home),
            KeyCode::Char('2') => self.switch_section(Section::Projects),
            KeyCode::Char('3') => self.switch_section(Section::Contact),
            KeyCode::Char('n') => self.nav_visible = !self.nav_visible,

            // Project browser keys
            KeyCode::Up | KeyCode::Char('k') if self.section == Section::Projects => {
                self.move_selection(-1);
            }
            KeyCode::Down | KeyCode::Char('j') if self.section == Section::Projects => {
                self.move_selection(1);
            }
            KeyCode::Enter | KeyCode::Char('o') if self.section == Section::Projects => {
                if !self.visible.is_empty() {
                    self.mode = Mode::ProjectDetail;
                }
            }
            KeyCode::Char('/') if self.section == Section::Projects => self.mode = Mode::Search,
            KeyCode::Char('f') if self.section == Section::Projects => {
                self.category_idx = match &self.filter.category {
                    None => 0,
                    Some(current) => self
                        .categories
                        .iter()
                        .position(|c| c == current)
                        .map(|idx| idx + 1)
                        .unwrap_or(0),
                };
                self.mode = Mode::CategoryFilter;
            }
            KeyCode::Char('c') if self.section == Section::Projects => {
                self.filter = ProjectFilter::default();
                self.apply_filter();
            }
            _ => {}
        }
    }

    /// Contact section: keys edit the form. Esc goes back home.
    fn handle_form_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.switch_section(Section::Home),
            KeyCode::Tab | KeyCode::Down => self.form.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.form.focus_prev(),
            KeyCode::Backspace => self.form.backspace(),
            KeyCode::Enter => {
                match self.form.submit() {
                    Ok(confirmation) => {
                        debug!("contact form submitted");
                        self.notice = Some(Notice::Success(confirmation));
                    }
                    Err(problem) => self.notice = Some(Notice::Error(problem)),
                }
            }
            KeyCode::Char(ch) => self.form.insert(ch),
            _ => {}
        }
    }

    // --- State transitions ---

    fn switch_section(&mut self, section: Section) {
        if self.section != section {
            debug!(from = self.section.title(), to = section.title(), "section switch");
        }
        self.section = section;
        self.mode = Mode::Normal;
    }

    /// Recompute the visible set after a filter change, keeping the
    /// selection in range.
    fn apply_filter(&mut self) {
        self.visible = self.filter.apply(&self.portfolio.projects);
        self.selected = self.selected.min(self.visible.len().saturating_sub(1));
        self.scroll = self.scroll.min(self.selected);
    }

    fn move_selection(&mut self, delta: isize) {
        if self.visible.is_empty() {
            return;
        }
        let last = self.visible.len() - 1;
        self.selected = if delta < 0 {
            self.selected.saturating_sub(delta.unsigned_abs())
        } else {
            (self.selected + delta as usize).min(last)
        };
        self.ensure_selected_visible();
    }

    fn ensure_selected_visible(&mut self) {
        if self.selected < self.scroll {
            self.scroll = self.selected;
        }
        let rows = self.page_size.max(1);
        if self.selected >= self.scroll + rows {
            self.scroll = self.selected + 1 - rows;
        }
    }

    // --- Rendering ---

    fn draw(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let nav_height = if self.nav_visible { 1 } else { 0 };
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(nav_height),
                Constraint::Min(1),
                Constraint::Length(1),
            ])
            .split(area);

        if self.nav_visible {
            self.render_nav(frame, chunks[0]);
        }

        let body = chunks[1].inner(ratatui::layout::Margin::new(1, 0));
        match self.section {
            Section::Home => hero::render(
                frame,
                body,
                &self.portfolio,
                &self.surface,
                self.driver.is_some(),
                &self.theme,
            ),
            Section::Projects => {
                self.page_size = projects::page_size(body);
                self.ensure_selected_visible();
                let view = ProjectListView {
                    projects: &self.portfolio.projects,
                    visible: &self.visible,
                    selected: self.selected,
                    scroll: self.scroll,
                    revealed: &self.revealed,
                    filter: &self.filter,
                    searching: self.mode == Mode::Search,
                };
                projects::render(frame, body, &view, &self.theme);
            }
            Section::Contact => form::render(
                frame,
                body,
                &self.form,
                &self.portfolio.contact,
                &self.theme,
            ),
        }

        self.render_footer(frame, chunks[2]);
        self.render_overlays(frame, area);
    }

    fn render_nav(&self, frame: &mut Frame, area: Rect) {
        let mut spans = Vec::new();
        for (idx, section) in Section::ALL.iter().enumerate() {
            if idx > 0 {
                spans.push(Span::styled(" │ ", self.theme.text_secondary_style()));
            }
            let label = format!("{} {}", idx + 1, section.title());
            let style = if *section == self.section {
                self.theme.accent_bold_style()
            } else {
                self.theme.text_secondary_style()
            };
            spans.push(Span::styled(label, style));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect) {
        let hints = match (self.section, self.mode) {
            (_, Mode::Search) => "type to search | Enter/Esc: done",
            (_, Mode::CategoryFilter) => "↑/↓: choose | Enter: apply | Esc: cancel",
            (Section::Projects, _) => "↑/↓: select | Enter: details | /: search | f: filter | ?: help",
            (Section::Contact, _) => "Tab: next field | Enter: send | Esc: back",
            _ => "Tab: sections | ?: help | q: quit",
        };
        let year = chrono::Local::now().year();
        let text = format!("{}  ·  © {} {}", hints, year, self.portfolio.name);
        let footer = Paragraph::new(text)
            .style(self.theme.text_secondary_style())
            .alignment(Alignment::Center);
        frame.render_widget(footer, area);
    }

    fn render_overlays(&self, frame: &mut Frame, area: Rect) {
        match self.mode {
            Mode::ProjectDetail => {
                if let Some(&project_idx) = self.visible.get(self.selected) {
                    modal::render_project_modal(
                        frame,
                        area,
                        &self.portfolio.projects[project_idx],
                        &self.theme,
                    );
                }
            }
            Mode::CategoryFilter => {
                let mut choices = vec!["All".to_string()];
                choices.extend(self.categories.iter().cloned());
                modal::render_category_modal(frame, area, &choices, self.category_idx, &self.theme);
            }
            Mode::Help => modal::render_help_modal(frame, area, &self.theme),
            _ => {}
        }

        if let Some(notice) = &self.notice {
            modal::render_notice_modal(frame, area, notice, &self.theme);
        }
    }
}
