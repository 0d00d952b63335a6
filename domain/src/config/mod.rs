//! Configuration-related domain concepts.

pub mod validation;
