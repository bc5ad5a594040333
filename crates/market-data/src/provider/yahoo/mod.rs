//! Yahoo Finance market data provider.
//!
//! This provider uses the Yahoo Finance chart API to fetch:
//! - Daily history for equities/ETFs (e.g., AAPL, 005930.KS, 035720.KQ)
//! - Foreign exchange rates (e.g., USDKRW=X)

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use num_traits::FromPrimitive;
use rust_decimal::Decimal;
use time::OffsetDateTime;
use tracing::{debug, warn};
use yahoo_finance_api as yahoo;

use crate::errors::MarketDataError;
use crate::models::Quote;
use crate::provider::{MarketDataProvider, ProviderConfig};

const PROVIDER_ID: &str = "YAHOO";

/// Yahoo symbol for the `from`→`to` currency pair (`USDKRW=X`).
///
/// The quote is the number of `to` units per one `from` unit.
pub fn fx_symbol(from: &str, to: &str) -> String {
    format!("{}{}=X", from.to_uppercase(), to.to_uppercase())
}

// ============================================================================
// Yahoo Provider
// ============================================================================

/// Yahoo Finance market data provider.
pub struct YahooProvider {
    connector: yahoo::YahooConnector,
}

impl YahooProvider {
    /// Create a new Yahoo Finance provider from explicit configuration.
    pub fn new(config: &ProviderConfig) -> Result<Self, MarketDataError> {
        let connector = yahoo::YahooConnector::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| {
                MarketDataError::provider(
                    PROVIDER_ID,
                    format!("Failed to initialize Yahoo connector: {}", e),
                )
            })?;
        Ok(Self { connector })
    }

    /// Convert chrono DateTime<Utc> to time::OffsetDateTime for the Yahoo API.
    fn chrono_to_offset_datetime(dt: DateTime<Utc>) -> OffsetDateTime {
        OffsetDateTime::from_unix_timestamp(dt.timestamp())
            .unwrap_or_else(|_| OffsetDateTime::now_utc())
    }

    /// Map library errors, turning "nothing there" into `SymbolNotFound`.
    fn map_yahoo_error(symbol: &str, e: yahoo::YahooError) -> MarketDataError {
        if matches!(e, yahoo::YahooError::NoQuotes | yahoo::YahooError::NoResult) {
            MarketDataError::SymbolNotFound(symbol.to_string())
        } else {
            MarketDataError::provider(PROVIDER_ID, e.to_string())
        }
    }

    /// Convert a Yahoo quote to our Quote model.
    ///
    /// A non-finite close is kept as an empty session rather than dropped, so
    /// the caller can see the gap.
    fn yahoo_quote_to_quote(yahoo_quote: &yahoo::Quote) -> Result<Quote, MarketDataError> {
        let timestamp: DateTime<Utc> = Utc
            .timestamp_opt(yahoo_quote.timestamp as i64, 0)
            .single()
            .ok_or_else(|| MarketDataError::ValidationFailed {
                message: format!("Invalid timestamp: {}", yahoo_quote.timestamp),
            })?;

        Ok(Quote {
            timestamp,
            open: Quote::close_from_f64(yahoo_quote.open),
            high: Quote::close_from_f64(yahoo_quote.high),
            low: Quote::close_from_f64(yahoo_quote.low),
            close: Quote::close_from_f64(yahoo_quote.close),
            volume: Decimal::from_u64(yahoo_quote.volume),
            source: PROVIDER_ID.to_string(),
        })
    }
}

// ============================================================================
// MarketDataProvider Implementation
// ============================================================================

#[async_trait]
impl MarketDataProvider for YahooProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn get_latest_quote(&self, symbol: &str) -> Result<Quote, MarketDataError> {
        debug!("Fetching latest quote for {} from Yahoo", symbol);

        let response = self
            .connector
            .get_latest_quotes(symbol, "1d")
            .await
            .map_err(|e| Self::map_yahoo_error(symbol, e))?;

        let yahoo_quote = response.last_quote().map_err(|e| {
            warn!("No quotes returned for {}: {}", symbol, e);
            MarketDataError::SymbolNotFound(symbol.to_string())
        })?;

        Self::yahoo_quote_to_quote(&yahoo_quote)
    }

    async fn get_historical_quotes(
        &self,
        symbol: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Quote>, MarketDataError> {
        debug!(
            "Fetching historical quotes for {} from {} to {} from Yahoo",
            symbol,
            start.format("%Y-%m-%d"),
            end.format("%Y-%m-%d")
        );

        let start_time = Self::chrono_to_offset_datetime(start);
        let end_time = Self::chrono_to_offset_datetime(end);

        let response = self
            .connector
            .get_quote_history(symbol, start_time, end_time)
            .await
            .map_err(|e| Self::map_yahoo_error(symbol, e))?;

        match response.quotes() {
            Ok(yahoo_quotes) => {
                let mut quotes: Vec<Quote> = yahoo_quotes
                    .iter()
                    .filter_map(|q| match Self::yahoo_quote_to_quote(q) {
                        Ok(quote) => Some(quote),
                        Err(e) => {
                            warn!("Skipping quote for {} due to conversion error: {}", symbol, e);
                            None
                        }
                    })
                    .collect();

                if quotes.is_empty() {
                    return Err(MarketDataError::NoDataForRange(symbol.to_string()));
                }

                quotes.sort_by_key(|q| q.timestamp);
                Ok(quotes)
            }
            Err(yahoo::YahooError::NoQuotes) => {
                warn!(
                    "No historical quotes returned for '{}' between {} and {}",
                    symbol,
                    start.format("%Y-%m-%d"),
                    end.format("%Y-%m-%d")
                );
                Err(MarketDataError::NoDataForRange(symbol.to_string()))
            }
            Err(e) => Err(MarketDataError::provider(PROVIDER_ID, e.to_string())),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
