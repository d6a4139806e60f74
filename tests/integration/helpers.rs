//! Shared helpers for integration tests.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// A small but complete portfolio document.
pub const SAMPLE_PORTFOLIO: &str = r#"{
    "name": "Ada Example",
    "title": "Data Analyst",
    "summary": "I turn spreadsheets into stories.",
    "phrases": ["Analyst", "Designer"],
    "projects": [
        {"title": "Sales Dashboard", "category": "analysis",
         "description": "Quarterly KPI dashboard", "tech": ["SQL", "Figma"]},
        {"title": "Onboarding Flow", "category": "design",
         "description": "Mobile signup prototype"},
        {"title": "Churn Model", "category": "analysis"}
    ],
    "contact": {"email": "ada@example.com", "location": "Jakarta"}
}"#;

/// Write `content` to a portfolio file inside a fresh temp dir.
///
/// Returns the dir (keep it alive for the file to exist) and the path.
pub fn temp_portfolio(content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("portfolio.json");
    fs::write(&path, content).expect("write portfolio fixture");
    (dir, path)
}
