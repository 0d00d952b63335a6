//! Local file quote source

use super::parse_quotes;
use async_trait::async_trait;
use quotecycle_application::{QuoteSource, QuoteSourceError};
use quotecycle_domain::Quote;
use std::path::PathBuf;
use tracing::debug;

/// Reads the corpus document from the local file system.
#[derive(Debug, Clone)]
pub struct FileQuoteSource {
    path: PathBuf,
}

impl FileQuoteSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl QuoteSource for FileQuoteSource {
    async fn fetch_quotes(&self) -> Result<Vec<Quote>, QuoteSourceError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| QuoteSourceError::Io(format!("{}: {}", self.path.display(), e)))?;
        debug!("Read {} bytes from {}", bytes.len(), self.path.display());
        parse_quotes(&bytes)
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_reads_quotes_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id": "q-1", "number": 1, "content": "Hello", "author": "World"}}]"#
        )
        .unwrap();

        let source = FileQuoteSource::new(file.path());
        let quotes = source.fetch_quotes().await.unwrap();
        assert_eq!(quotes.len(), 1);
        assert_eq!(quotes[0].content, "Hello");
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileQuoteSource::new(dir.path().join("missing.json"));

        let err = source.fetch_quotes().await.unwrap_err();
        assert!(matches!(err, QuoteSourceError::Io(_)));
        assert!(err.to_string().contains("missing.json"));
    }

    #[tokio::test]
    async fn test_malformed_file_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = FileQuoteSource::new(file.path()).fetch_quotes().await.unwrap_err();
        assert!(matches!(err, QuoteSourceError::Parse(_)));
    }
}
