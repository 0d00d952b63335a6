//! Infrastructure layer for quotecycle
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer (quote sources), the `rand`-backed random
//! source, and configuration file loading.

pub mod config;
pub mod quote_source;
pub mod random;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileConfig, FileCorpusConfig, FileOutputConfig, FileShareConfig,
};
pub use quote_source::{FileQuoteSource, HttpQuoteSource, source_for_location};
pub use random::RngSource;
