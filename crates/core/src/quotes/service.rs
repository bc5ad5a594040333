//! Fetches price histories for a run through the market-data crate.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use log::{debug, error};
use tickerbook_market_data::{MarketDataError, MarketDataProvider, Quote};

use super::price_series::{align_sessions, PriceSeries};
use crate::errors::Result;

#[async_trait]
pub trait QuoteServiceTrait: Send + Sync {
    /// Session-aligned closing-price series for every identifier, covering
    /// the lookback window that ends at `end`.
    ///
    /// Any provider failure fails the whole call.
    async fn fetch_price_series(
        &self,
        identifiers: &[String],
        end: DateTime<Utc>,
    ) -> Result<HashMap<String, PriceSeries>>;
}

pub struct QuoteService {
    provider: Arc<dyn MarketDataProvider>,
    lookback_days: i64,
}

impl QuoteService {
    pub fn new(provider: Arc<dyn MarketDataProvider>, lookback_days: i64) -> Self {
        Self {
            provider,
            lookback_days,
        }
    }
}

#[async_trait]
impl QuoteServiceTrait for QuoteService {
    async fn fetch_price_series(
        &self,
        identifiers: &[String],
        end: DateTime<Utc>,
    ) -> Result<HashMap<String, PriceSeries>> {
        let start = end - Duration::days(self.lookback_days);
        let mut histories: Vec<(String, Vec<Quote>)> = Vec::with_capacity(identifiers.len());

        for identifier in identifiers {
            let quotes = self
                .provider
                .get_historical_quotes(identifier, start, end)
                .await
                .map_err(|e| {
                    error!(
                        "Price history fetch from {} failed for {}: {}",
                        self.provider.id(),
                        identifier,
                        e
                    );
                    e
                })?;
            if quotes.is_empty() {
                return Err(MarketDataError::NoDataForRange(identifier.clone()).into());
            }
            debug!("Fetched {} sessions for {}", quotes.len(), identifier);
            histories.push((identifier.clone(), quotes));
        }

        Ok(align_sessions(&histories))
    }
}
