//! Command-line interface definitions.
//!
//! Lives in the library so `xtask` can reuse the clap command tree for man
//! page generation.

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Version string including build metadata from the build script.
///
/// Official builds (the `release` feature) omit the git hash.
pub fn long_version() -> &'static str {
    static VERSION: OnceLock<String> = OnceLock::new();
    VERSION.get_or_init(|| {
        let date = option_env!("FOLIO_BUILD_DATE").unwrap_or("unknown");
        match option_env!("FOLIO_GIT_SHA") {
            Some(sha) if !sha.is_empty() => {
                format!("{} ({} {})", env!("CARGO_PKG_VERSION"), sha, date)
            }
            _ => format!("{} ({})", env!("CARGO_PKG_VERSION"), date),
        }
    })
}

/// Terminal portfolio viewer.
#[derive(Debug, Parser)]
#[command(
    name = "folio",
    about = "Browse a portfolio in the terminal",
    version,
    long_version = long_version()
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Open a portfolio document in the interactive viewer
    View {
        /// Portfolio document (JSON); falls back to the configured default
        file: Option<PathBuf>,
    },
    /// Validate a portfolio document and print a summary
    Check {
        /// Portfolio document (JSON)
        file: PathBuf,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the current configuration as TOML
    Show,
    /// Open the configuration file in $EDITOR
    Edit,
    /// Add missing fields to the configuration file
    Migrate,
}
