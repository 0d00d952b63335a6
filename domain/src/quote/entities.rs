//! Quote entity

use super::value_objects::QuoteId;
use serde::{Deserialize, Serialize};

/// A single quote from the corpus (Entity)
///
/// Field names match the corpus JSON document exactly. Quotes are never
/// mutated after the corpus is loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub id: QuoteId,
    /// Display ordinal, not guaranteed unique
    pub number: i64,
    pub content: String,
    pub author: String,
    /// Category labels; a record without the field has none
    #[serde(default)]
    pub categories: Vec<String>,
}

impl Quote {
    pub fn new(
        id: impl Into<QuoteId>,
        number: i64,
        content: impl Into<String>,
        author: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            number,
            content: content.into(),
            author: author.into(),
            categories: Vec::new(),
        }
    }

    /// Builder: add a category label
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        let category = category.into();
        if !self.categories.contains(&category) {
            self.categories.push(category);
        }
        self
    }

    /// Check whether this quote carries the given category label
    pub fn has_category(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c == category)
    }

    /// Plain-text share line: `"content" - author`
    pub fn share_text(&self) -> String {
        format!("\"{}\" - {}", self.content, self.author)
    }
}
