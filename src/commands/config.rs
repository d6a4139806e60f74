//! Config subcommands handler

use std::fs;
use std::io::{self, BufRead, Write};

use anyhow::Result;

use folio::config::{migrate_config, Config};
use folio::theme::Theme;

/// Show current configuration as TOML.
#[cfg(not(tarpaulin_include))]
pub fn handle_show() -> Result<()> {
    let config = Config::load()?;
    let toml_str = toml::to_string_pretty(&config)?;
    let theme = Theme::from_name(&config.theme);
    println!("{}", theme.primary_text(&toml_str));
    Ok(())
}

/// Open configuration file in the default editor.
///
/// Uses $EDITOR environment variable (defaults to 'vi').
#[cfg(not(tarpaulin_include))]
pub fn handle_edit() -> Result<()> {
    let config_path = Config::config_path()?;
    let theme = Theme::default();

    // Ensure config exists
    if !config_path.exists() {
        let config = Config::default();
        config.save()?;
    }

    let editor = std::env::var("EDITOR").unwrap_or_else(|_| "vi".to_string());

    println!(
        "{}",
        theme.primary_text(&format!(
            "Opening {} with {}",
            config_path.display(),
            editor
        ))
    );

    std::process::Command::new(&editor)
        .arg(&config_path)
        .status()
        .map_err(|e| anyhow::anyhow!("Failed to open editor: {}", e))?;

    Ok(())
}

/// Migrate config file by adding missing fields.
///
/// Reads the existing config file (or empty if it doesn't exist), adds any
/// missing fields from the current default config, shows the fields that
/// would be added, and prompts for confirmation.
#[cfg(not(tarpaulin_include))]
pub fn handle_migrate() -> Result<()> {
    let theme = Theme::default();
    let config_path = Config::config_path()?;
    let file_exists = config_path.exists();

    let content = if file_exists {
        fs::read_to_string(&config_path)?
    } else {
        String::new()
    };

    let result = migrate_config(&content)?;

    if !result.has_changes() {
        println!("{}", theme.primary_text("Config is already up to date."));
        return Ok(());
    }

    if file_exists {
        println!(
            "{}",
            theme.primary_text(&format!(
                "Found {} missing field(s):",
                result.added_fields.len()
            ))
        );
    } else {
        println!(
            "{}",
            theme.primary_text("Config file does not exist. Will create with default settings.")
        );
    }
    for field in &result.added_fields {
        println!("{}", theme.accent_text(&format!("  + {}", field)));
    }
    println!();

    if !prompt_confirmation(&format!("Write {}?", config_path.display()))? {
        println!("{}", theme.primary_text("No changes made."));
        return Ok(());
    }

    if let Some(parent) = config_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&config_path, &result.content)?;
    println!("{}", theme.success_text("Config file updated."));
    Ok(())
}

/// Ask a yes/no question on stdin. Defaults to no.
#[cfg(not(tarpaulin_include))]
fn prompt_confirmation(question: &str) -> Result<bool> {
    print!("{} [y/N] ", question);
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}
