//! Interactive quote browsing

pub mod repl;

pub use repl::{BrowseCommand, BrowseRepl};
