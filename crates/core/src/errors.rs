//! Core error types for Tickerbook.
//!
//! Provider errors from the market data crate are wrapped as-is; everything
//! the engine itself can reject is described by the enums below.

use thiserror::Error;

use crate::fx::FxError;
use crate::quotes::PriceLookupError;
use tickerbook_market_data::MarketDataError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for a report run.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Market data operation failed: {0}")]
    MarketData(#[from] MarketDataError),

    #[error("Fx error: {0}")]
    Fx(#[from] FxError),

    #[error("Price lookup failed: {0}")]
    PriceLookup(#[from] PriceLookupError),

    #[error("Holdings calculation failed: {0}")]
    Calculation(#[from] CalculatorError),

    #[error("Invalid configuration value: {0}")]
    InvalidConfigValue(String),
}

/// Errors that occur while building or valuing positions.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalculatorError {
    #[error("Holding '{display_name}' has zero total quantity; every lot needs amount >= 1")]
    ZeroQuantity { display_name: String },

    #[error("Exchange rate must be positive, got {0}")]
    NonPositiveExchangeRate(String),
}

/// Validation errors for user input and data parsing.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Failed to parse holdings file: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Validation(ValidationError::Json(err))
    }
}
