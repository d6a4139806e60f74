//! TUI (Text User Interface) module for folio
//!
//! Terminal-based portfolio viewer built on ratatui/crossterm: hero section
//! with the typing animation, project browser with filter and search,
//! project detail modal, and contact form.

pub mod app;
pub mod ui;
pub mod widgets;

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::config::Config;
use crate::portfolio::Portfolio;
use crate::theme::Theme;

pub use app::App;

/// Terminal session guard: raw mode + alternate screen, restored on drop
/// so the shell comes back intact even when the app errors out.
struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalGuard {
    fn new() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self { terminal })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

/// Run the portfolio viewer until the user quits.
pub fn run(portfolio: Portfolio, config: &Config) -> Result<()> {
    let theme = Theme::from_name(&config.theme);
    let tick_rate = Duration::from_millis(config.tick_rate_ms.max(1));
    let mut app = App::new(portfolio, theme, tick_rate);

    let mut guard = TerminalGuard::new()?;
    app.run(&mut guard.terminal)
}
