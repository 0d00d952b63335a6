//! Corpus Loader use case.
//!
//! Fetches the quote dataset once and serves every consumer from the cached
//! [`Corpus`]. The fetch is held as a shared future, so callers arriving
//! while it is still in flight await the same fetch and observe the same
//! outcome.
//!
//! A failed fetch is not cached: once a failure has been observed, the next
//! call to [`CorpusLoader::load`] starts a fresh fetch. Retrying is left to
//! the caller.

use crate::ports::quote_source::QuoteSource;
use futures::future::{BoxFuture, FutureExt, Shared};
use quotecycle_domain::{Corpus, Quote};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, PoisonError};
use thiserror::Error;
use tracing::{debug, info};

/// Errors surfaced by the Corpus Loader
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CorpusError {
    #[error("Quote corpus unavailable: {0}")]
    Unavailable(String),
}

type CorpusFetch = Shared<BoxFuture<'static, Result<Arc<Corpus>, CorpusError>>>;

/// Fetch-once cache of the quote corpus.
///
/// Construct one at startup and share it (`Arc<CorpusLoader>`) with every
/// component that needs quotes.
pub struct CorpusLoader {
    source: Arc<dyn QuoteSource>,
    fetch: Mutex<Option<CorpusFetch>>,
}

impl CorpusLoader {
    pub fn new(source: Arc<dyn QuoteSource>) -> Self {
        Self {
            source,
            fetch: Mutex::new(None),
        }
    }

    /// Load the corpus, fetching it on first use only.
    pub async fn load(&self) -> Result<Arc<Corpus>, CorpusError> {
        self.current_fetch().await
    }

    /// The corpus, if a fetch has already completed successfully
    pub fn cached(&self) -> Option<Arc<Corpus>> {
        let slot = self.fetch.lock().unwrap_or_else(PoisonError::into_inner);
        match slot.as_ref().and_then(|fetch| fetch.peek()) {
            Some(Ok(corpus)) => Some(Arc::clone(corpus)),
            _ => None,
        }
    }

    /// Look up a quote by identifier. `Ok(None)` means "not found".
    pub async fn get_by_id(&self, id: &str) -> Result<Option<Quote>, CorpusError> {
        let corpus = self.load().await?;
        Ok(corpus.get_by_id(id).cloned())
    }

    /// Distinct category labels, sorted ascending
    pub async fn unique_categories(&self) -> Result<Vec<String>, CorpusError> {
        Ok(self.load().await?.unique_categories())
    }

    /// Number of quotes per category label
    pub async fn category_counts(&self) -> Result<BTreeMap<String, usize>, CorpusError> {
        Ok(self.load().await?.category_counts())
    }

    /// Distinct author names, sorted ascending
    pub async fn unique_authors(&self) -> Result<Vec<String>, CorpusError> {
        Ok(self.load().await?.unique_authors())
    }

    /// Number of quotes per author
    pub async fn author_counts(&self) -> Result<BTreeMap<String, usize>, CorpusError> {
        Ok(self.load().await?.author_counts())
    }

    /// Return the in-flight or completed fetch, starting a new one if there
    /// is none yet or the last one failed.
    fn current_fetch(&self) -> CorpusFetch {
        let mut slot = self.fetch.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(existing) = slot.as_ref() {
            match existing.peek() {
                Some(Err(e)) => debug!("Previous corpus fetch failed ({}), fetching again", e),
                Some(Ok(_)) => {
                    debug!("Serving cached corpus");
                    return existing.clone();
                }
                None => {
                    debug!("Joining in-flight corpus fetch");
                    return existing.clone();
                }
            }
        }

        let fetch = Self::start_fetch(Arc::clone(&self.source));
        *slot = Some(fetch.clone());
        fetch
    }

    fn start_fetch(source: Arc<dyn QuoteSource>) -> CorpusFetch {
        async move {
            let location = source.location();
            info!("Fetching quote corpus from {}", location);

            match source.fetch_quotes().await {
                Ok(quotes) => {
                    let corpus = Corpus::new(quotes);
                    info!(
                        "Loaded {} quotes in {} categories",
                        corpus.len(),
                        corpus.unique_categories().len()
                    );
                    Ok(Arc::new(corpus))
                }
                Err(e) => Err(CorpusError::Unavailable(format!("{}: {}", location, e))),
            }
        }
        .boxed()
        .shared()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::quote_source::QuoteSourceError;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};

    // ==================== Test Mocks ====================

    /// Source that yields a few times before answering, so concurrent
    /// callers overlap with the in-flight fetch.
    struct MockSource {
        responses: Mutex<VecDeque<Result<Vec<Quote>, QuoteSourceError>>>,
        calls: AtomicUsize,
    }

    impl MockSource {
        fn new(responses: Vec<Result<Vec<Quote>, QuoteSourceError>>) -> Self {
            Self {
                responses: Mutex::new(VecDeque::from(responses)),
                calls: AtomicUsize::new(0),
            }
        }

        fn with_quotes(quotes: Vec<Quote>) -> Self {
            Self::new(vec![Ok(quotes)])
        }
    }

    #[async_trait]
    impl QuoteSource for MockSource {
        async fn fetch_quotes(&self) -> Result<Vec<Quote>, QuoteSourceError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            for _ in 0..3 {
                tokio::task::yield_now().await;
            }
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(QuoteSourceError::Io("no more responses".to_string())))
        }

        fn location(&self) -> String {
            "mock://quotes".to_string()
        }
    }

    fn ten_quotes() -> Vec<Quote> {
        (0..10)
            .map(|i| {
                Quote::new(format!("q-{}", i), i, format!("content {}", i), "Author")
                    .with_category(if i % 2 == 0 { "even" } else { "odd" })
            })
            .collect()
    }

    // ==================== Fetch-once ====================

    #[tokio::test]
    async fn test_load_fetches_once() {
        let source = Arc::new(MockSource::with_quotes(ten_quotes()));
        let loader = CorpusLoader::new(source.clone());

        let first = loader.load().await.unwrap();
        let second = loader.load().await.unwrap();
        let _ = loader.unique_categories().await.unwrap();
        let _ = loader.category_counts().await.unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_concurrent_callers_share_one_fetch() {
        let source = Arc::new(MockSource::with_quotes(ten_quotes()));
        let loader = CorpusLoader::new(source.clone());

        let (corpus, categories, counts) = tokio::join!(
            loader.load(),
            loader.unique_categories(),
            loader.category_counts()
        );

        assert_eq!(corpus.unwrap().len(), 10);
        assert_eq!(categories.unwrap(), vec!["even", "odd"]);
        assert_eq!(counts.unwrap().get("even"), Some(&5));
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_concurrent_callers_share_one_failure() {
        let source = Arc::new(MockSource::new(vec![Err(QuoteSourceError::Transport(
            "connection refused".to_string(),
        ))]));
        let loader = CorpusLoader::new(source.clone());

        let (a, b, c) = tokio::join!(
            loader.load(),
            loader.unique_categories(),
            loader.get_by_id("q-1")
        );

        let expected = CorpusError::Unavailable(
            "mock://quotes: Transport error: connection refused".to_string(),
        );
        assert_eq!(a.unwrap_err(), expected);
        assert_eq!(b.unwrap_err(), expected);
        assert_eq!(c.unwrap_err(), expected);
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_failure_is_not_cached() {
        let source = Arc::new(MockSource::new(vec![
            Err(QuoteSourceError::Parse("expected array".to_string())),
            Ok(ten_quotes()),
        ]));
        let loader = CorpusLoader::new(source.clone());

        assert!(loader.load().await.is_err());
        assert!(loader.cached().is_none());

        let corpus = loader.load().await.unwrap();
        assert_eq!(corpus.len(), 10);
        assert!(loader.cached().is_some());
        assert_eq!(source.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_empty_dataset_is_not_an_error() {
        let loader = CorpusLoader::new(Arc::new(MockSource::with_quotes(vec![])));
        let corpus = loader.load().await.unwrap();
        assert!(corpus.is_empty());
    }

    // ==================== Lookups and views ====================

    #[tokio::test]
    async fn test_get_by_id_missing_is_none() {
        let loader = CorpusLoader::new(Arc::new(MockSource::with_quotes(ten_quotes())));

        assert_eq!(loader.get_by_id("missing-id").await.unwrap(), None);
        let found = loader.get_by_id("q-3").await.unwrap().unwrap();
        assert_eq!(found.content, "content 3");
        assert_eq!(loader.get_by_id("q-3").await.unwrap(), Some(found));
    }

    #[tokio::test]
    async fn test_author_views() {
        let loader = CorpusLoader::new(Arc::new(MockSource::with_quotes(ten_quotes())));
        assert_eq!(loader.unique_authors().await.unwrap(), vec!["Author"]);
        assert_eq!(loader.author_counts().await.unwrap().get("Author"), Some(&10));
    }
}
