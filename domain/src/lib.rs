//! Domain layer for quotecycle
//!
//! This crate contains the quote entities, the corpus views, and the
//! selection policy. It has no dependencies on infrastructure or
//! presentation concerns and performs no I/O.
//!
//! # Core Concepts
//!
//! ## Corpus
//!
//! The full, read-only collection of quotes. Loaded once, never mutated.
//! Offers lookup by id plus sorted category/author listings and counts.
//!
//! ## Cycle
//!
//! Quotes are drawn without replacement from the pool matching the active
//! category. Once every quote in the pool has been shown, the pool's
//! history is reset and a new cycle begins.

pub mod config;
pub mod core;
pub mod corpus;
pub mod quote;
pub mod selection;

// Re-export commonly used types
pub use config::validation::{ConfigIssue, ConfigIssueCode, Severity};
pub use core::{error::DomainError, text::preview};
pub use corpus::Corpus;
pub use quote::{entities::Quote, value_objects::QuoteId};
pub use selection::{
    filter::CategoryFilter,
    random::{FirstIndex, RandomSource},
    sampler::{Draw, DrawKind, Sampler},
    shown_set::ShownSet,
};
