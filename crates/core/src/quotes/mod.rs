//! Quote handling for a report run.
//!
//! - [`price_series`] - Ordered closing prices of one identifier, normalized
//!   to `Decimal` with empty sessions as `None`
//! - [`price_lookup`] - Current/previous session selection with bounded fallback
//! - [`service`] - Fetches and session-aligns histories through the
//!   market-data crate
//!
//! ```text
//! QuoteService → MarketDataProvider (market-data crate)
//!       ↓
//! PriceSeries → PriceLookup → PriceSnapshot
//! ```

pub mod errors;
pub mod price_lookup;
pub mod price_series;
pub mod service;

#[cfg(test)]
mod service_tests;

pub use errors::PriceLookupError;
pub use price_lookup::{PriceLookup, PriceSnapshot, SessionPrices};
pub use price_series::{align_sessions, PriceSeries};
pub use service::{QuoteService, QuoteServiceTrait};
