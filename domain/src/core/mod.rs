//! Core domain concepts shared across all subdomains.
//!
//! - [`error::DomainError`] - domain-level errors
//! - [`text::preview`] - short single-line previews of quote text for logs

pub mod error;
pub mod text;
