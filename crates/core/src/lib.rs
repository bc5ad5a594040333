//! Tickerbook Core - Domain entities, services, and traits.
//!
//! This crate contains the valuation engine for a two-market personal equity
//! portfolio: identifier resolution, session price lookup, lot merging, and
//! per-market totals in the reporting currency. Network access goes through
//! the `tickerbook-market-data` crate's provider trait.

pub mod constants;
pub mod declarations;
pub mod errors;
pub mod fx;
pub mod portfolio;
pub mod quotes;
pub mod resolver;
pub mod settings;

#[cfg(test)]
pub(crate) mod testing;

// Re-export common types from portfolio and resolver modules
pub use portfolio::*;
pub use resolver::{IdentifierResolver, Market};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
