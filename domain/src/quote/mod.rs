//! Quote subdomain.
//!
//! - [`entities::Quote`] - one immutable quote record
//! - [`value_objects::QuoteId`] - opaque, stable quote identifier

pub mod entities;
pub mod value_objects;
