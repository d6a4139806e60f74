//! folio binary entry point.

mod commands;

use anyhow::Result;
use clap::{CommandFactory, Parser};

use folio::cli::{Cli, Command, ConfigAction};

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    match cli.command {
        Command::View { file } => commands::view::handle(file),
        Command::Check { file } => commands::check::handle(&file),
        Command::Config { action } => match action {
            ConfigAction::Show => commands::config::handle_show(),
            ConfigAction::Edit => commands::config::handle_edit(),
            ConfigAction::Migrate => commands::config::handle_migrate(),
        },
        Command::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "folio", &mut std::io::stdout());
            Ok(())
        }
    }
}

/// Set up tracing to a log file when FOLIO_LOG names one.
///
/// The viewer owns the terminal, so logs never go to stdout/stderr.
fn init_tracing() {
    let Ok(path) = std::env::var("FOLIO_LOG") else {
        return;
    };
    let Ok(file) = std::fs::File::create(&path) else {
        return;
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("folio=debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .init();
}
