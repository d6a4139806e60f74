//! TUI widgets for folio
//!
//! Section renderers and reusable components for the terminal interface.

pub mod form;
pub mod hero;
pub mod modal;
pub mod projects;

pub use form::{ContactForm, FormField};
