//! Selection notification port
//!
//! Hosts that want push notifications instead of polling
//! [`SelectionEngine`](crate::use_cases::selection_engine::SelectionEngine)
//! implement this trait. All methods run synchronously after the state
//! change is visible to readers.

use quotecycle_domain::{DrawKind, Quote};

/// Callback for selection state changes
pub trait SelectionObserver: Send + Sync {
    /// Called after the active category was set or cleared
    fn on_category_changed(&self, _category: Option<&str>) {}

    /// Called after a quote was drawn
    fn on_quote_selected(&self, _quote: &Quote, _kind: DrawKind) {}

    /// Called when a draw found the pool exhausted and reset its history
    fn on_cycle_reset(&self, _category: Option<&str>, _pool_size: usize) {}
}

/// No-op observer for when notifications are not needed
pub struct NoSelectionObserver;

impl SelectionObserver for NoSelectionObserver {}
