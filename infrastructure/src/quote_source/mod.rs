//! Quote source adapters
//!
//! Implementations of [`QuoteSource`] for the two kinds of corpus location:
//!
//! - `http://` / `https://` URLs → [`HttpQuoteSource`]
//! - anything else (optionally prefixed with `file://`) → [`FileQuoteSource`]

mod file;
mod http;

pub use file::FileQuoteSource;
pub use http::HttpQuoteSource;

use crate::config::FileCorpusConfig;
use quotecycle_application::{QuoteSource, QuoteSourceError};
use quotecycle_domain::Quote;
use std::sync::Arc;
use std::time::Duration;

/// Build the adapter matching the configured corpus location
pub fn source_for_location(
    config: &FileCorpusConfig,
) -> Result<Arc<dyn QuoteSource>, QuoteSourceError> {
    let location = config.location.trim();

    if location.starts_with("http://") || location.starts_with("https://") {
        let source = HttpQuoteSource::new(
            location,
            Duration::from_secs(config.timeout_seconds),
            &config.user_agent,
        )?;
        return Ok(Arc::new(source));
    }

    let path = location.strip_prefix("file://").unwrap_or(location);
    Ok(Arc::new(FileQuoteSource::new(path)))
}

/// Parse the corpus document: a JSON array of quote records
fn parse_quotes(bytes: &[u8]) -> Result<Vec<Quote>, QuoteSourceError> {
    serde_json::from_slice(bytes).map_err(|e| QuoteSourceError::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus_config(location: &str) -> FileCorpusConfig {
        FileCorpusConfig {
            location: location.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_parse_quotes() {
        let json = br#"[
            {"id": "a", "number": 1, "content": "x", "author": "y", "categories": ["stoic"]},
            {"id": "b", "number": 2, "content": "z", "author": "w", "categories": []}
        ]"#;
        let quotes = parse_quotes(json).unwrap();
        assert_eq!(quotes.len(), 2);
        assert!(quotes[0].has_category("stoic"));
    }

    #[test]
    fn test_parse_rejects_non_array() {
        let err = parse_quotes(br#"{"quotes": []}"#).unwrap_err();
        assert!(matches!(err, QuoteSourceError::Parse(_)));
    }

    #[test]
    fn test_source_for_http_location() {
        let source = source_for_location(&corpus_config("https://example.org/quotes.json")).unwrap();
        assert_eq!(source.location(), "https://example.org/quotes.json");
    }

    #[test]
    fn test_source_for_file_location() {
        let source = source_for_location(&corpus_config("file:///srv/quotes.json")).unwrap();
        assert_eq!(source.location(), "/srv/quotes.json");

        let source = source_for_location(&corpus_config("assets/quotes.json")).unwrap();
        assert_eq!(source.location(), "assets/quotes.json");
    }
}
