//! Quote selection policy.
//!
//! The selection subdomain owns the "no repeat until exhausted" rule:
//!
//! - [`filter::CategoryFilter`] - the active filter (none or one category)
//! - [`shown_set::ShownSet`] - identifiers already returned in this cycle
//! - [`random::RandomSource`] - injectable uniform index source
//! - [`sampler::Sampler`] - filter + shown-set state and the draw algorithm
//!
//! Everything here is synchronous and deterministic apart from the index
//! handed back by the [`random::RandomSource`].

pub mod filter;
pub mod random;
pub mod sampler;
pub mod shown_set;
