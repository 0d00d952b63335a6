//! Quote source port
//!
//! Defines how the application obtains the raw quote dataset. Adapters
//! (HTTP, local file) live in the infrastructure layer.

use async_trait::async_trait;
use quotecycle_domain::Quote;
use thiserror::Error;

/// Errors that can occur while fetching the quote dataset
#[derive(Error, Debug)]
pub enum QuoteSourceError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("HTTP {status} from {location}")]
    Status { status: u16, location: String },

    #[error("I/O error: {0}")]
    Io(String),

    #[error("Invalid quote data: {0}")]
    Parse(String),
}

/// Read-only source of the quote dataset
///
/// Called at most once per successful corpus load; the
/// [`CorpusLoader`](crate::use_cases::corpus_loader::CorpusLoader) caches
/// the result.
#[async_trait]
pub trait QuoteSource: Send + Sync {
    /// Fetch every quote record, in dataset order
    async fn fetch_quotes(&self) -> Result<Vec<Quote>, QuoteSourceError>;

    /// Human-readable location, used in logs and error messages
    fn location(&self) -> String;
}
