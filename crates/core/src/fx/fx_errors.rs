use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum FxError {
    RateNotFound(String),
    InvalidCurrencyPair(String),
    InvalidRate(String),
    FetchError(String),
}

impl fmt::Display for FxError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FxError::RateNotFound(msg) => write!(f, "Exchange rate not found: {}", msg),
            FxError::InvalidCurrencyPair(msg) => write!(f, "Invalid currency pair: {}", msg),
            FxError::InvalidRate(msg) => write!(f, "Invalid exchange rate: {}", msg),
            FxError::FetchError(msg) => write!(f, "Fetch error: {}", msg),
        }
    }
}

impl Error for FxError {}
