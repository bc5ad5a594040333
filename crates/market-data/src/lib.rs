//! Tickerbook Market Data Crate
//!
//! This crate fetches raw market data for the Tickerbook report:
//! - Daily closing-price history for exchange-qualified tickers
//! - The latest foreign exchange quote for a currency pair
//!
//! # Architecture
//!
//! ```text
//! +------------------+     +----------------------+
//! |   Core crate     | --> |  MarketDataProvider  |  (trait object)
//! +------------------+     +----------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |  YahooProvider   |  (yahoo_finance_api)
//!                          +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |     Quote        |  (close may be empty)
//!                          +------------------+
//! ```
//!
//! Providers are configured explicitly through [`ProviderConfig`]; nothing in
//! this crate relies on process-wide state.

pub mod errors;
pub mod models;
pub mod provider;

pub use errors::MarketDataError;
pub use models::Quote;
pub use provider::yahoo::{fx_symbol, YahooProvider};
pub use provider::{MarketDataProvider, ProviderConfig};
