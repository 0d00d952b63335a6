//! Presentation layer for quotecycle
//!
//! This crate contains CLI definitions, console output formatting,
//! share links, and the interactive browsing REPL.

pub mod browse;
pub mod cli;
pub mod output;
pub mod share;

// Re-export commonly used types
pub use browse::{BrowseCommand, BrowseRepl};
pub use cli::commands::{Cli, Command};
pub use output::console::ConsoleFormatter;
pub use share::ShareLinks;
