//! Market data provider trait definitions.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::errors::MarketDataError;
use crate::models::Quote;

/// Trait for market data providers.
///
/// Implement this trait to add support for a new market data source.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use tickerbook_market_data::{MarketDataError, MarketDataProvider, Quote};
///
/// struct MyProvider;
///
/// #[async_trait]
/// impl MarketDataProvider for MyProvider {
///     fn id(&self) -> &'static str {
///         "MY_PROVIDER"
///     }
///
///     // ... implement quote methods
/// }
/// ```
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Unique identifier for this provider.
    ///
    /// Should be a constant string like "YAHOO". Used for logging and errors.
    fn id(&self) -> &'static str;

    /// Fetch the latest quote for a provider symbol.
    async fn get_latest_quote(&self, symbol: &str) -> Result<Quote, MarketDataError>;

    /// Fetch daily quotes for a provider symbol.
    ///
    /// # Arguments
    ///
    /// * `symbol` - Provider symbol (e.g., "005930.KS", "AAPL")
    /// * `start` - Start of the date range (inclusive)
    /// * `end` - End of the date range (inclusive)
    ///
    /// # Returns
    ///
    /// Quotes ordered by timestamp ascending. Sessions without a usable close
    /// are kept with `close: None`.
    async fn get_historical_quotes(
        &self,
        symbol: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Quote>, MarketDataError>;
}
