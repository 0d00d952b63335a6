//! Browse Quotes use case.
//!
//! The control flow a viewer drives: open a quote (optionally from a deep
//! link), skip to the next one, toggle a category, list categories for a
//! filter menu.

use crate::use_cases::corpus_loader::CorpusError;
use crate::use_cases::selection_engine::{SelectionEngine, SelectionError};
use quotecycle_domain::Quote;
use std::sync::Arc;
use tracing::{debug, info};

/// Where a displayed quote came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteOrigin {
    /// Resolved directly from a requested identifier
    DeepLink,
    /// Drawn by the selection engine
    Selection,
}

/// A quote ready to display, with its origin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShownQuote {
    pub quote: Quote,
    pub origin: QuoteOrigin,
}

/// One row of the category filter menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryEntry {
    pub label: String,
    pub count: usize,
    pub active: bool,
}

/// Use case driving one viewing session
pub struct BrowseQuotesUseCase {
    engine: Arc<SelectionEngine>,
}

impl BrowseQuotesUseCase {
    pub fn new(engine: Arc<SelectionEngine>) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &Arc<SelectionEngine> {
        &self.engine
    }

    /// Initial load.
    ///
    /// A requested id that resolves is shown as-is and does not enter the
    /// shown-set. An unknown id falls back to a normal draw.
    pub async fn open(&self, requested_id: Option<&str>) -> Result<ShownQuote, SelectionError> {
        if let Some(id) = requested_id {
            if let Some(quote) = self.engine.corpus().get_by_id(id).await? {
                info!("Opened quote {} from link", quote.id);
                return Ok(ShownQuote {
                    quote,
                    origin: QuoteOrigin::DeepLink,
                });
            }
            info!("Quote {} not found, drawing a random one", id);
        }
        self.skip().await
    }

    /// Show the next quote under the active filter
    pub async fn skip(&self) -> Result<ShownQuote, SelectionError> {
        let quote = self.engine.next_quote().await?;
        Ok(ShownQuote {
            quote,
            origin: QuoteOrigin::Selection,
        })
    }

    /// Toggle `category` and show a fresh quote under the new filter
    pub async fn toggle_category(&self, category: &str) -> Result<ShownQuote, SelectionError> {
        let active = self.engine.toggle_category(category);
        debug!("Toggled '{}', active now {:?}", category, active);
        self.skip().await
    }

    /// Clear any active category and show a fresh quote
    pub async fn clear_category(&self) -> Result<ShownQuote, SelectionError> {
        self.engine.set_category(None);
        self.skip().await
    }

    /// Categories with their quote counts, sorted by label
    pub async fn categories(&self) -> Result<Vec<CategoryEntry>, CorpusError> {
        let counts = self.engine.corpus().category_counts().await?;
        let active = self.engine.active_category();

        Ok(counts
            .into_iter()
            .map(|(label, count)| CategoryEntry {
                active: active.as_deref() == Some(label.as_str()),
                label,
                count,
            })
            .collect())
    }
}
