use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, error};
use rust_decimal::Decimal;
use tickerbook_market_data::{fx_symbol, MarketDataProvider};

use super::FxError;
use crate::errors::Result;

/// Trait defining the contract for FX service operations.
#[async_trait]
pub trait FxServiceTrait: Send + Sync {
    /// Reporting-currency units per one foreign-currency unit.
    async fn get_exchange_rate(&self) -> Result<Decimal>;
}

/// Fetches the latest foreign→reporting rate from a market data provider.
pub struct FxService {
    provider: Arc<dyn MarketDataProvider>,
    foreign_currency: String,
    reporting_currency: String,
}

impl FxService {
    pub fn new(
        provider: Arc<dyn MarketDataProvider>,
        foreign_currency: &str,
        reporting_currency: &str,
    ) -> Self {
        Self {
            provider,
            foreign_currency: foreign_currency.to_uppercase(),
            reporting_currency: reporting_currency.to_uppercase(),
        }
    }

    fn pair(&self) -> String {
        format!("{}/{}", self.foreign_currency, self.reporting_currency)
    }
}

#[async_trait]
impl FxServiceTrait for FxService {
    async fn get_exchange_rate(&self) -> Result<Decimal> {
        if self.foreign_currency == self.reporting_currency {
            return Err(FxError::InvalidCurrencyPair(self.pair()).into());
        }

        let symbol = fx_symbol(&self.foreign_currency, &self.reporting_currency);
        let quote = self.provider.get_latest_quote(&symbol).await.map_err(|e| {
            error!("Exchange rate fetch for {} failed: {}", self.pair(), e);
            FxError::FetchError(format!("{}: {}", self.pair(), e))
        })?;

        let rate = quote
            .close
            .ok_or_else(|| FxError::RateNotFound(format!("{} ({})", self.pair(), symbol)))?;
        if rate <= Decimal::ZERO {
            return Err(FxError::InvalidRate(format!("{} = {}", self.pair(), rate)).into());
        }

        debug!("Exchange rate {} = {}", self.pair(), rate);
        Ok(rate)
    }
}
