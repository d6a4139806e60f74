//! `folio view` — run the interactive viewer.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use tracing::info;

use folio::config::Config;
use folio::portfolio::Portfolio;
use folio::tui;

#[cfg(not(tarpaulin_include))]
pub fn handle(file: Option<PathBuf>) -> Result<()> {
    if !atty::is(atty::Stream::Stdout) {
        bail!("refusing to start the viewer: stdout is not a terminal");
    }

    let config = Config::load()?;
    let path = file.or_else(|| config.portfolio_path.clone()).context(
        "no portfolio file given and none configured (set portfolio_path via `folio config edit`)",
    )?;
    let portfolio = Portfolio::load(&path)?;

    info!(
        path = %path.display(),
        projects = portfolio.projects.len(),
        phrases = portfolio.phrases.len(),
        "starting viewer"
    );
    tui::run(portfolio, &config)
}
