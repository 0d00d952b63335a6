//! Selection Engine use case.
//!
//! Holds the active category and the shown-set for one viewing session and
//! hands out quotes under the no-repeat-until-exhausted policy implemented
//! by [`Sampler`].
//!
//! Filter changes and draws take the same lock, so a draw never observes a
//! half-applied filter change. The lock is never held across `.await`: the
//! corpus is loaded first, then the draw runs synchronously.

use crate::ports::selection_observer::{NoSelectionObserver, SelectionObserver};
use crate::use_cases::corpus_loader::{CorpusError, CorpusLoader};
use quotecycle_domain::core::text::preview;
use quotecycle_domain::{DomainError, DrawKind, Quote, RandomSource, Sampler};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur when selecting a quote
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error(transparent)]
    CorpusUnavailable(#[from] CorpusError),

    #[error("No quotes available")]
    EmptyCorpus,
}

impl From<DomainError> for SelectionError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::EmptyCorpus => SelectionError::EmptyCorpus,
        }
    }
}

struct SelectionState {
    sampler: Sampler,
    rng: Box<dyn RandomSource>,
}

/// Active filter plus no-repeat sampling over the shared corpus
pub struct SelectionEngine {
    corpus: Arc<CorpusLoader>,
    state: Mutex<SelectionState>,
    observer: Arc<dyn SelectionObserver>,
}

impl SelectionEngine {
    pub fn new(corpus: Arc<CorpusLoader>, rng: impl RandomSource + 'static) -> Self {
        Self {
            corpus,
            state: Mutex::new(SelectionState {
                sampler: Sampler::new(),
                rng: Box::new(rng),
            }),
            observer: Arc::new(NoSelectionObserver),
        }
    }

    /// Create with a selection observer.
    pub fn with_observer(mut self, observer: Arc<dyn SelectionObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// The corpus loader this engine draws from
    pub fn corpus(&self) -> &Arc<CorpusLoader> {
        &self.corpus
    }

    /// Set the active category, or clear it with `None`.
    ///
    /// Always clears the shown-set, even if the category did not change.
    pub fn set_category(&self, category: Option<String>) {
        self.update_category(|_| category);
    }

    /// Clear the filter if `category` is active, otherwise make it active.
    ///
    /// Returns the category that is active afterwards.
    pub fn toggle_category(&self, category: &str) -> Option<String> {
        self.update_category(|active| {
            if active == Some(category) {
                None
            } else {
                Some(category.to_string())
            }
        })
    }

    pub fn active_category(&self) -> Option<String> {
        self.lock_state().sampler.active_category().map(str::to_string)
    }

    /// Number of quotes shown in the current cycle
    pub fn shown_count(&self) -> usize {
        self.lock_state().sampler.shown().len()
    }

    /// Draw the next quote under the active filter.
    pub async fn next_quote(&self) -> Result<Quote, SelectionError> {
        let corpus = self.corpus.load().await?;

        let (quote, kind, pool_size, fell_back, active) = {
            let mut state = self.lock_state();
            let SelectionState { sampler, rng } = &mut *state;
            let draw = sampler.draw(&corpus, rng.as_mut())?;
            (
                draw.quote.clone(),
                draw.kind,
                draw.pool_size,
                draw.fell_back,
                sampler.active_category().map(str::to_string),
            )
        };

        if fell_back {
            warn!(
                "Category '{}' matches no quotes, drawing from the whole corpus",
                active.as_deref().unwrap_or_default()
            );
        }
        if kind == DrawKind::CycleReset {
            info!("All {} quotes in the pool were shown, starting a new cycle", pool_size);
            self.observer.on_cycle_reset(active.as_deref(), pool_size);
        }
        debug!("Selected {} \"{}\"", quote.id, preview(&quote.content, 48));
        self.observer.on_quote_selected(&quote, kind);

        Ok(quote)
    }

    /// Choose the next category from the current one and apply it under a
    /// single lock. The shown-set is always cleared.
    fn update_category(
        &self,
        choose: impl FnOnce(Option<&str>) -> Option<String>,
    ) -> Option<String> {
        let active = {
            let mut state = self.lock_state();
            let next = choose(state.sampler.active_category());
            state.sampler.set_category(next);
            state.sampler.active_category().map(str::to_string)
        };

        info!(
            "Active category: {}",
            active.as_deref().unwrap_or("(all)")
        );
        self.observer.on_category_changed(active.as_deref());
        active
    }

    fn lock_state(&self) -> MutexGuard<'_, SelectionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
