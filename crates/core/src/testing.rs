//! Shared test doubles for the core crate's unit tests.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use rust_decimal::Decimal;
use tickerbook_market_data::{MarketDataError, MarketDataProvider, Quote};

/// In-memory provider with canned histories and latest quotes.
#[derive(Default)]
pub struct MockMarketDataProvider {
    histories: HashMap<String, Vec<Quote>>,
    latest: HashMap<String, Quote>,
    failing: HashSet<String>,
    history_calls: Mutex<Vec<String>>,
}

impl MockMarketDataProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Daily closes for consecutive days starting 2024-05-01; `None` is an
    /// empty session.
    pub fn with_history(mut self, symbol: &str, closes: &[Option<Decimal>]) -> Self {
        let quotes = closes
            .iter()
            .enumerate()
            .map(|(i, close)| Quote::new(session_day(i as i64), *close, "MOCK"))
            .collect();
        self.histories.insert(symbol.to_string(), quotes);
        self
    }

    pub fn with_quotes(mut self, symbol: &str, quotes: Vec<Quote>) -> Self {
        self.histories.insert(symbol.to_string(), quotes);
        self
    }

    pub fn with_latest(mut self, symbol: &str, close: Option<Decimal>) -> Self {
        self.latest
            .insert(symbol.to_string(), Quote::new(session_day(0), close, "MOCK"));
        self
    }

    pub fn failing(mut self, symbol: &str) -> Self {
        self.failing.insert(symbol.to_string());
        self
    }

    pub fn history_calls(&self) -> Vec<String> {
        self.history_calls.lock().unwrap().clone()
    }
}

pub fn session_day(offset: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap() + Duration::days(offset)
}

#[async_trait]
impl MarketDataProvider for MockMarketDataProvider {
    fn id(&self) -> &'static str {
        "MOCK"
    }

    async fn get_latest_quote(&self, symbol: &str) -> Result<Quote, MarketDataError> {
        if self.failing.contains(symbol) {
            return Err(MarketDataError::provider("MOCK", "intentional failure"));
        }
        self.latest
            .get(symbol)
            .cloned()
            .ok_or_else(|| MarketDataError::SymbolNotFound(symbol.to_string()))
    }

    async fn get_historical_quotes(
        &self,
        symbol: &str,
        _start: DateTime<Utc>,
        _end: DateTime<Utc>,
    ) -> Result<Vec<Quote>, MarketDataError> {
        self.history_calls.lock().unwrap().push(symbol.to_string());
        if self.failing.contains(symbol) {
            return Err(MarketDataError::provider("MOCK", "intentional failure"));
        }
        self.histories
            .get(symbol)
            .cloned()
            .ok_or_else(|| MarketDataError::SymbolNotFound(symbol.to_string()))
    }
}
