//! Project filtering and search.
//!
//! A project is shown when it passes both the category filter and the text
//! query: `category` must match exactly when set, and the query (trimmed,
//! case-insensitive) must be a substring of the title or the description.

use super::model::Project;

/// Active filter state for the project browser.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectFilter {
    /// Category to show; `None` shows all
    pub category: Option<String>,
    /// Free-text search over title and description
    pub query: String,
}

impl ProjectFilter {
    /// True when the filter would pass every project through.
    pub fn is_neutral(&self) -> bool {
        self.category.is_none() && self.query.trim().is_empty()
    }

    /// Whether `project` passes both the category filter and the query.
    pub fn matches(&self, project: &Project) -> bool {
        let category_ok = match &self.category {
            Some(category) => project.category == *category,
            None => true,
        };
        if !category_ok {
            return false;
        }

        let query = self.query.trim().to_lowercase();
        query.is_empty()
            || project.title.to_lowercase().contains(&query)
            || project.description.to_lowercase().contains(&query)
    }

    /// Indices of the projects that pass the filter, in document order.
    pub fn apply(&self, projects: &[Project]) -> Vec<usize> {
        projects
            .iter()
            .enumerate()
            .filter(|(_, p)| self.matches(p))
            .map(|(idx, _)| idx)
            .collect()
    }
}
