//! Active quote filter

use crate::quote::entities::Quote;

/// Filter applied to the corpus before sampling (Value Object)
///
/// Only one dimension is supported: at most one category label.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// No filter: every quote is a candidate
    #[default]
    All,
    /// Only quotes carrying this category label
    Category(String),
}

impl CategoryFilter {
    /// Build a filter from an optional label. An empty label means no filter.
    pub fn from_label(label: Option<impl Into<String>>) -> Self {
        match label.map(Into::into) {
            Some(label) if !label.is_empty() => CategoryFilter::Category(label),
            _ => CategoryFilter::All,
        }
    }

    /// The active category label, if any
    pub fn label(&self) -> Option<&str> {
        match self {
            CategoryFilter::All => None,
            CategoryFilter::Category(label) => Some(label),
        }
    }

    /// Check whether a quote passes this filter
    pub fn matches(&self, quote: &Quote) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(label) => quote.has_category(label),
        }
    }
}

impl std::fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CategoryFilter::All => write!(f, "all"),
            CategoryFilter::Category(label) => write!(f, "category:{}", label),
        }
    }
}
