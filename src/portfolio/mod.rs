//! Portfolio document model
//!
//! A portfolio is a single JSON document describing the owner, the phrase
//! list for the hero typing animation, the project list, and contact
//! details. Loaded once at startup and read-only afterwards.

mod filter;
mod model;

pub use filter::ProjectFilter;
pub use model::{ContactInfo, Portfolio, PortfolioError, Project};
