use std::collections::HashMap;

use log::debug;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::errors::PriceLookupError;
use super::price_series::PriceSeries;
use crate::constants::{DEFAULT_MAX_FALLBACK_STEPS, MIN_SESSIONS};

/// Native-currency prices of the latest and prior trading session.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SessionPrices {
    pub current: Decimal,
    pub previous: Decimal,
}

/// Selects current and previous session prices from a [`PriceSeries`].
///
/// `current` starts at the last entry and `previous` at the second-to-last.
/// An empty session is skipped by stepping one entry back, at most
/// `max_fallback_steps` times per price. Each price is searched independently
/// from its own starting entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceLookup {
    max_fallback_steps: usize,
}

impl Default for PriceLookup {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_FALLBACK_STEPS)
    }
}

impl PriceLookup {
    pub fn new(max_fallback_steps: usize) -> Self {
        Self { max_fallback_steps }
    }

    pub fn max_fallback_steps(&self) -> usize {
        self.max_fallback_steps
    }

    pub fn session_prices(&self, series: &PriceSeries) -> Result<SessionPrices, PriceLookupError> {
        if series.len() < MIN_SESSIONS {
            return Err(PriceLookupError::InsufficientHistory {
                identifier: series.identifier().to_string(),
                required: MIN_SESSIONS,
                available: series.len(),
            });
        }
        Ok(SessionPrices {
            current: self.pick(series, 0, "current")?,
            previous: self.pick(series, 1, "previous")?,
        })
    }

    /// Walks back from `len - 1 - offset_from_end` until a session has a close.
    fn pick(
        &self,
        series: &PriceSeries,
        offset_from_end: usize,
        session: &'static str,
    ) -> Result<Decimal, PriceLookupError> {
        let closes = series.closes();
        let start = closes.len() - 1 - offset_from_end;
        let mut inspected = 0;

        for step in 0..=self.max_fallback_steps {
            let Some(index) = start.checked_sub(step) else {
                break;
            };
            inspected += 1;
            if let Some(price) = closes[index] {
                if step > 0 {
                    debug!(
                        "{}: {} session empty, fell back {} session(s) to {}",
                        series.identifier(),
                        session,
                        step,
                        price
                    );
                }
                return Ok(price);
            }
        }

        Err(PriceLookupError::Exhausted {
            identifier: series.identifier().to_string(),
            session,
            inspected,
        })
    }
}

/// Session prices for every identifier of a run, looked up once per
/// identifier and shared by all lots and both holding views.
#[derive(Debug, Clone, Default)]
pub struct PriceSnapshot {
    prices: HashMap<String, SessionPrices>,
    unavailable: HashMap<String, PriceLookupError>,
}

impl PriceSnapshot {
    /// Runs the lookup over every series. Identifiers in `identifiers` that
    /// have no series at all are recorded as having no history.
    pub fn build(
        identifiers: &[String],
        series: &HashMap<String, PriceSeries>,
        lookup: &PriceLookup,
    ) -> Self {
        let mut snapshot = Self::default();
        for identifier in identifiers {
            let result = match series.get(identifier) {
                Some(series) => lookup.session_prices(series),
                None => Err(PriceLookupError::InsufficientHistory {
                    identifier: identifier.clone(),
                    required: MIN_SESSIONS,
                    available: 0,
                }),
            };
            match result {
                Ok(prices) => {
                    snapshot.prices.insert(identifier.clone(), prices);
                }
                Err(e) => {
                    snapshot.unavailable.insert(identifier.clone(), e);
                }
            }
        }
        snapshot
    }

    /// Prices for an identifier, or the reason they could not be selected.
    pub fn get(&self, identifier: &str) -> Result<SessionPrices, PriceLookupError> {
        if let Some(prices) = self.prices.get(identifier) {
            return Ok(*prices);
        }
        Err(self
            .unavailable
            .get(identifier)
            .cloned()
            .unwrap_or_else(|| PriceLookupError::InsufficientHistory {
                identifier: identifier.to_string(),
                required: MIN_SESSIONS,
                available: 0,
            }))
    }

    pub fn insert(&mut self, identifier: impl Into<String>, prices: SessionPrices) {
        let identifier = identifier.into();
        self.unavailable.remove(&identifier);
        self.prices.insert(identifier, prices);
    }

    pub fn priced_count(&self) -> usize {
        self.prices.len()
    }
}
