//! Quote corpus and its derived read-only views.
//!
//! A [`Corpus`] is built once from the fetched dataset and never mutated.
//! All views are computed on demand from the owned quotes.

use crate::quote::entities::Quote;
use crate::quote::value_objects::QuoteId;
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// The full, read-only, once-loaded collection of quotes
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    quotes: Vec<Quote>,
    by_id: HashMap<QuoteId, usize>,
}

impl Corpus {
    /// Build a corpus from quotes in dataset order.
    ///
    /// If an identifier appears more than once, lookups resolve to the
    /// first occurrence.
    pub fn new(quotes: Vec<Quote>) -> Self {
        let mut by_id = HashMap::with_capacity(quotes.len());
        for (index, quote) in quotes.iter().enumerate() {
            by_id.entry(quote.id.clone()).or_insert(index);
        }
        Self { quotes, by_id }
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    /// All quotes in dataset order
    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    /// Look up a quote by identifier. Absence is a normal outcome.
    pub fn get_by_id(&self, id: &str) -> Option<&Quote> {
        self.by_id.get(id).map(|&index| &self.quotes[index])
    }

    /// Distinct category labels, sorted ascending
    pub fn unique_categories(&self) -> Vec<String> {
        self.quotes
            .iter()
            .flat_map(|q| q.categories.iter().cloned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Number of quotes carrying each category label
    pub fn category_counts(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for category in self.quotes.iter().flat_map(|q| q.categories.iter()) {
            *counts.entry(category.clone()).or_insert(0) += 1;
        }
        counts
    }

    /// Distinct author names, sorted ascending
    pub fn unique_authors(&self) -> Vec<String> {
        self.quotes
            .iter()
            .map(|q| q.author.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Number of quotes attributed to each author
    pub fn author_counts(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for quote in &self.quotes {
            *counts.entry(quote.author.clone()).or_insert(0) += 1;
        }
        counts
    }
}

impl From<Vec<Quote>> for Corpus {
    fn from(quotes: Vec<Quote>) -> Self {
        Corpus::new(quotes)
    }
}
