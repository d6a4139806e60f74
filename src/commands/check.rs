//! `folio check` — validate a portfolio document without opening the TUI.

use std::path::Path;

use anyhow::Result;

use folio::config::Config;
use folio::portfolio::Portfolio;
use folio::theme::Theme;

pub fn handle(file: &Path) -> Result<()> {
    let portfolio = Portfolio::load(file)?;
    let theme = Config::load()
        .map(|config| Theme::from_name(&config.theme))
        .unwrap_or_default();

    println!(
        "{}",
        theme.accent_text(&format!("{} — {}", portfolio.name, portfolio.title))
    );

    if portfolio.phrases.is_empty() {
        println!(
            "{}",
            theme.secondary_text("phrases: none (typing animation disabled)")
        );
    } else {
        println!(
            "{}",
            theme.primary_text(&format!("phrases: {}", portfolio.phrases.join(" · ")))
        );
    }

    println!(
        "{}",
        theme.primary_text(&format!("projects: {}", portfolio.projects.len()))
    );
    for category in portfolio.categories() {
        let count = portfolio
            .projects
            .iter()
            .filter(|p| p.category == category)
            .count();
        println!(
            "{}",
            theme.secondary_text(&format!("  {}: {}", category, count))
        );
    }

    match &portfolio.contact.email {
        Some(email) => println!("{}", theme.primary_text(&format!("contact: {}", email))),
        None => println!("{}", theme.secondary_text("contact: no email set")),
    }

    println!("{}", theme.success_text("portfolio document is valid"));
    Ok(())
}
