//! Identifiers already shown in the current cycle

use crate::quote::value_objects::QuoteId;
use std::collections::HashSet;

/// Set of quote identifiers returned since the last filter change or
/// exhaustion reset.
#[derive(Debug, Clone, Default)]
pub struct ShownSet {
    ids: HashSet<QuoteId>,
}

impl ShownSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Record an identifier. Returns `false` if it was already present.
    pub fn record(&mut self, id: QuoteId) -> bool {
        self.ids.insert(id)
    }

    /// Forget the given identifiers, leaving any others untouched
    pub fn forget<'a>(&mut self, ids: impl IntoIterator<Item = &'a QuoteId>) {
        for id in ids {
            self.ids.remove(id);
        }
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &QuoteId> {
        self.ids.iter()
    }
}
