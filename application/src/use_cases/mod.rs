//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod browse_quotes;
pub mod corpus_loader;
pub mod selection_engine;
