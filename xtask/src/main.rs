//! Developer tasks for folio.
//!
//! Currently only man page generation: `cargo run -p xtask -- man`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};

use folio::cli::Cli;

#[derive(Debug, Parser)]
#[command(name = "xtask", about = "Developer tasks for folio")]
struct Xtask {
    #[command(subcommand)]
    task: Task,
}

#[derive(Debug, Subcommand)]
enum Task {
    /// Generate man pages
    Man {
        /// Output directory
        #[arg(long, default_value = "target/man")]
        out_dir: PathBuf,
    },
}

fn main() -> Result<()> {
    match Xtask::parse().task {
        Task::Man { out_dir } => generate_man_pages(&out_dir),
    }
}

/// Render a man page for the top-level command and one per subcommand.
fn generate_man_pages(out_dir: &Path) -> Result<()> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create {}", out_dir.display()))?;

    let cmd = Cli::command();
    write_man_page(out_dir, "folio.1", &cmd)?;

    for sub in cmd.get_subcommands() {
        if sub.is_hide_set() {
            continue;
        }
        let name = format!("folio-{}.1", sub.get_name());
        write_man_page(out_dir, &name, sub)?;
    }

    println!("man pages written to {}", out_dir.display());
    Ok(())
}

fn write_man_page(out_dir: &Path, file_name: &str, cmd: &clap::Command) -> Result<()> {
    let man = clap_mangen::Man::new(cmd.clone());
    let mut buffer = Vec::new();
    man.render(&mut buffer)?;

    let path = out_dir.join(file_name);
    fs::write(&path, buffer).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}
