//! Subcommand handlers for the folio binary.

pub mod check;
pub mod config;
pub mod view;
