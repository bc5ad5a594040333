use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Market data quote for one trading session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// Timestamp of the session
    pub timestamp: DateTime<Utc>,

    /// Opening price
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open: Option<Decimal>,

    /// High price
    #[serde(skip_serializing_if = "Option::is_none")]
    pub high: Option<Decimal>,

    /// Low price
    #[serde(skip_serializing_if = "Option::is_none")]
    pub low: Option<Decimal>,

    /// Closing price. `None` when the provider reported the session without a
    /// usable close (no trade, holiday row, non-finite value).
    pub close: Option<Decimal>,

    /// Trading volume
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<Decimal>,

    /// Source of the quote (YAHOO, MOCK, ...)
    pub source: String,
}

impl Quote {
    /// Create a new quote with minimal required fields
    pub fn new(timestamp: DateTime<Utc>, close: Option<Decimal>, source: &str) -> Self {
        Self {
            timestamp,
            open: None,
            high: None,
            low: None,
            close,
            volume: None,
            source: source.to_string(),
        }
    }

    /// Close price converted from a provider float.
    ///
    /// `NaN` and infinities map to `None`.
    pub fn close_from_f64(value: f64) -> Option<Decimal> {
        if value.is_finite() {
            Decimal::from_f64_retain(value)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_quote_new() {
        let quote = Quote::new(Utc::now(), Some(dec!(150.25)), "YAHOO");
        assert_eq!(quote.close, Some(dec!(150.25)));
        assert_eq!(quote.source, "YAHOO");
        assert!(quote.open.is_none());
    }

    #[test]
    fn test_close_from_f64_rejects_non_finite() {
        assert_eq!(Quote::close_from_f64(f64::NAN), None);
        assert_eq!(Quote::close_from_f64(f64::INFINITY), None);
        assert_eq!(Quote::close_from_f64(101.5), Some(dec!(101.5)));
    }
}
