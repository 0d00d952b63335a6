//! Application layer for quotecycle
//!
//! This crate contains the Corpus Loader, the Selection Engine, the browse
//! flow built on top of them, and the ports infrastructure adapters
//! implement. It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    quote_source::{QuoteSource, QuoteSourceError},
    selection_observer::{NoSelectionObserver, SelectionObserver},
};
pub use use_cases::browse_quotes::{BrowseQuotesUseCase, CategoryEntry, QuoteOrigin, ShownQuote};
pub use use_cases::corpus_loader::{CorpusError, CorpusLoader};
pub use use_cases::selection_engine::{SelectionEngine, SelectionError};
