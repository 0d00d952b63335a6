//! Quote value objects

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;

/// Opaque stable identifier of a quote (Value Object)
///
/// Unique across the corpus. Deep links and the shown-set both key on it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuoteId(String);

impl QuoteId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for QuoteId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for QuoteId {
    fn from(s: &str) -> Self {
        QuoteId::new(s)
    }
}

impl From<String> for QuoteId {
    fn from(s: String) -> Self {
        QuoteId(s)
    }
}

impl Borrow<str> for QuoteId {
    fn borrow(&self) -> &str {
        &self.0
    }
}
