use log::debug;
use rust_decimal::Decimal;

use super::valuation_model::{HoldingRow, InvestmentTotals, MarketSection, TrendBasis};
use crate::errors::{CalculatorError, Result};
use crate::portfolio::holdings::{Holding, HoldingView};
use crate::resolver::Market;

/// Values holdings per market in the reporting currency.
///
/// Domestic holdings are converted at 1, foreign holdings at the exchange
/// rate supplied for the run. The engine holds no state between calls.
#[derive(Debug, Clone, Copy)]
pub struct ValuationEngine {
    exchange_rate: Decimal,
    trend_basis: TrendBasis,
}

impl ValuationEngine {
    pub fn new(exchange_rate: Decimal, trend_basis: TrendBasis) -> Result<Self> {
        if exchange_rate <= Decimal::ZERO {
            return Err(CalculatorError::NonPositiveExchangeRate(exchange_rate.to_string()).into());
        }
        Ok(Self {
            exchange_rate,
            trend_basis,
        })
    }

    pub fn exchange_rate(&self) -> Decimal {
        self.exchange_rate
    }

    pub fn rate_for(&self, market: Market) -> Decimal {
        match market {
            Market::Domestic => Decimal::ONE,
            Market::Foreign => self.exchange_rate,
        }
    }

    /// One section per market, domestic first. Rows within a market are in
    /// ascending display-name order; markets without holdings still get an
    /// empty section with zero totals.
    pub fn value_view(&self, view: HoldingView, holdings: &[Holding]) -> Vec<MarketSection> {
        Market::ALL
            .iter()
            .map(|&market| self.value_market(view, market, holdings))
            .collect()
    }

    fn value_market(&self, view: HoldingView, market: Market, holdings: &[Holding]) -> MarketSection {
        let mut in_market: Vec<&Holding> = holdings.iter().filter(|h| h.market == market).collect();
        in_market.sort_by(|a, b| a.display_name.cmp(&b.display_name));

        let mut totals = InvestmentTotals::new(market, self.rate_for(market));
        let rows = in_market
            .into_iter()
            .map(|holding| {
                let contribution = totals.add(holding);
                HoldingRow::new(holding, &contribution, self.trend_basis)
            })
            .collect::<Vec<_>>();
        let totals = totals.finalize();

        debug!(
            "Valued {} {} holding(s) in {} view: cost {}, value {}",
            totals.holdings_count, market, view, totals.total_cost, totals.total_value
        );

        MarketSection {
            view,
            market,
            rows,
            totals,
        }
    }
}
