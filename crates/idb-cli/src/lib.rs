//! CLI library components for IndustryDB lead filters.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod settings;
pub mod summary;
pub mod types;
