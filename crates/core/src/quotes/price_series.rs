use std::collections::{BTreeMap, BTreeSet, HashMap};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tickerbook_market_data::Quote;

/// Closing prices of one identifier, oldest session first.
///
/// `None` marks a session without a usable close (the instrument did not
/// trade that day, e.g. a holiday on its exchange).
#[derive(Debug, Clone, PartialEq)]
pub struct PriceSeries {
    identifier: String,
    closes: Vec<Option<Decimal>>,
}

impl PriceSeries {
    pub fn new(identifier: impl Into<String>, closes: Vec<Option<Decimal>>) -> Self {
        Self {
            identifier: identifier.into(),
            closes,
        }
    }

    /// Builds a series from provider floats; `NaN` and infinities become
    /// empty sessions.
    pub fn from_f64(identifier: impl Into<String>, closes: &[f64]) -> Self {
        Self::new(identifier, closes.iter().map(|c| Quote::close_from_f64(*c)).collect())
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn closes(&self) -> &[Option<Decimal>] {
        &self.closes
    }

    pub fn len(&self) -> usize {
        self.closes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.closes.is_empty()
    }
}

/// Aligns per-identifier histories on the union of their session dates.
///
/// A date on which one identifier has no quote (its exchange was closed while
/// another one traded) becomes an empty session in that identifier's series,
/// so every series has the same length and the same dates.
pub fn align_sessions(histories: &[(String, Vec<Quote>)]) -> HashMap<String, PriceSeries> {
    let dates: BTreeSet<NaiveDate> = histories
        .iter()
        .flat_map(|(_, quotes)| quotes.iter().map(|q| q.timestamp.date_naive()))
        .collect();

    histories
        .iter()
        .map(|(identifier, quotes)| {
            // Later quotes for the same date replace earlier ones.
            let by_date: BTreeMap<NaiveDate, Option<Decimal>> = quotes
                .iter()
                .map(|q| (q.timestamp.date_naive(), q.close))
                .collect();
            let closes = dates
                .iter()
                .map(|date| by_date.get(date).copied().flatten())
                .collect();
            (identifier.clone(), PriceSeries::new(identifier.clone(), closes))
        })
        .collect()
}
