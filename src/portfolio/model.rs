//! Portfolio document types and loading.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading a portfolio document.
#[derive(Debug, Error)]
pub enum PortfolioError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid portfolio document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A complete portfolio document.
///
/// `phrases` feeds the hero typing animation and may be empty, in which
/// case the animation is disabled and everything else works unchanged.
/// Unknown fields are rejected so typos surface in `folio check`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Portfolio {
    /// Owner's display name
    pub name: String,
    /// Role or headline shown under the name
    pub title: String,
    /// Short introduction paragraph
    #[serde(default)]
    pub summary: String,
    /// Phrases cycled by the typing animation
    #[serde(default)]
    pub phrases: Vec<String>,
    /// Projects shown in the browser
    #[serde(default)]
    pub projects: Vec<Project>,
    /// Contact details for the contact section
    #[serde(default)]
    pub contact: ContactInfo,
}

/// A single project entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Project {
    pub title: String,
    /// Category tag used by the filter buttons
    pub category: String,
    #[serde(default)]
    pub description: String,
    /// Technologies, shown in the detail modal
    #[serde(default)]
    pub tech: Vec<String>,
    #[serde(default)]
    pub link: Option<String>,
}

/// Contact details. All fields optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContactInfo {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

impl Portfolio {
    /// Load a portfolio document from a JSON file.
    pub fn load(path: &Path) -> Result<Self, PortfolioError> {
        let content = fs::read_to_string(path).map_err(|source| PortfolioError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// Parse a portfolio document from a JSON string.
    pub fn from_json(content: &str) -> Result<Self, PortfolioError> {
        Ok(serde_json::from_str(content)?)
    }

    /// The distinct project categories, sorted, in filter-button order.
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = self
            .projects
            .iter()
            .map(|p| p.category.clone())
            .collect();
        categories.sort();
        categories.dedup();
        categories
    }
}
