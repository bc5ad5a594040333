//! Market data models
//!
//! - `quote` - Daily quote returned by providers (Quote)

mod quote;

pub use quote::Quote;
