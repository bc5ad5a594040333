//! Valuation domain models: per-holding rows and per-market totals.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::portfolio::holdings::{Holding, HoldingView};
use crate::resolver::Market;

/// Which price a row's trend compares the current price against.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum TrendBasis {
    /// Current price against the purchase price.
    #[default]
    Purchase,
    /// Current price against the previous session's price.
    Daily,
}

/// Up/down marker of a row.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    /// Up when the current price is at or above the reference price.
    pub fn of(holding: &Holding, basis: TrendBasis) -> Self {
        let reference = match basis {
            TrendBasis::Purchase => holding.purchase_price,
            TrendBasis::Daily => holding.previous_price,
        };
        if holding.current_price >= reference {
            Trend::Up
        } else {
            Trend::Down
        }
    }
}

/// One holding's reporting-currency amounts before truncation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contribution {
    pub cost: Decimal,
    pub value: Decimal,
    pub profit_loss: Decimal,
}

impl Contribution {
    pub fn of(holding: &Holding, rate: Decimal) -> Self {
        let quantity = holding.quantity_decimal();
        let profit_loss_raw = (holding.current_price - holding.purchase_price) * quantity;
        Self {
            cost: holding.purchase_price * quantity * rate,
            value: holding.current_price * quantity * rate,
            profit_loss: profit_loss_raw * rate,
        }
    }
}

/// Add-only accumulator for one market of one view.
///
/// Consumed by [`InvestmentTotals::finalize`]; no further additions are
/// possible once the totals are published.
#[derive(Debug)]
pub struct InvestmentTotals {
    market: Market,
    rate: Decimal,
    total_cost: Decimal,
    total_value: Decimal,
    total_profit_loss: Decimal,
    holdings_count: usize,
}

impl InvestmentTotals {
    pub fn new(market: Market, rate: Decimal) -> Self {
        Self {
            market,
            rate,
            total_cost: Decimal::ZERO,
            total_value: Decimal::ZERO,
            total_profit_loss: Decimal::ZERO,
            holdings_count: 0,
        }
    }

    pub fn market(&self) -> Market {
        self.market
    }

    pub fn is_empty(&self) -> bool {
        self.holdings_count == 0
    }

    /// Converts the holding at this market's rate and adds it to the totals.
    pub fn add(&mut self, holding: &Holding) -> Contribution {
        let contribution = Contribution::of(holding, self.rate);
        self.total_cost += contribution.cost;
        self.total_value += contribution.value;
        self.total_profit_loss += contribution.profit_loss;
        self.holdings_count += 1;
        contribution
    }

    pub fn finalize(self) -> MarketTotals {
        MarketTotals {
            market: self.market,
            total_cost: self.total_cost,
            total_value: self.total_value,
            total_profit_loss: self.total_profit_loss,
            holdings_count: self.holdings_count,
        }
    }
}

/// Published totals of one market, in the reporting currency.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MarketTotals {
    pub market: Market,
    pub total_cost: Decimal,
    pub total_value: Decimal,
    pub total_profit_loss: Decimal,
    pub holdings_count: usize,
}

impl MarketTotals {
    /// Totals with sub-unit fractions discarded, as they are printed.
    pub fn whole_units(&self) -> MarketTotals {
        MarketTotals {
            market: self.market,
            total_cost: self.total_cost.trunc(),
            total_value: self.total_value.trunc(),
            total_profit_loss: self.total_profit_loss.trunc(),
            holdings_count: self.holdings_count,
        }
    }

    /// Profit/loss relative to cost, in percent.
    pub fn profit_loss_percent(&self) -> Option<Decimal> {
        if self.total_cost.is_zero() {
            None
        } else {
            Some(self.total_profit_loss / self.total_cost * Decimal::ONE_HUNDRED)
        }
    }
}

/// One output row. Reporting-currency amounts are whole units; prices stay in
/// the instrument's native currency.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HoldingRow {
    pub display_name: String,
    pub identifier: String,
    pub quantity: u64,
    pub cost: Decimal,
    pub value: Decimal,
    pub profit_loss: Decimal,
    /// `current / purchase × 100`.
    pub price_ratio: Option<Decimal>,
    pub purchase_price: Decimal,
    pub current_price: Decimal,
    pub previous_price: Decimal,
    pub daily_delta: Decimal,
    pub daily_delta_percent: Option<Decimal>,
    pub trend: Trend,
}

impl HoldingRow {
    pub fn new(holding: &Holding, contribution: &Contribution, basis: TrendBasis) -> Self {
        let price_ratio = if holding.purchase_price.is_zero() {
            None
        } else {
            Some(holding.current_price / holding.purchase_price * Decimal::ONE_HUNDRED)
        };
        let daily_delta = holding.current_price - holding.previous_price;
        let daily_delta_percent = if holding.previous_price.is_zero() {
            None
        } else {
            Some(daily_delta / holding.previous_price * Decimal::ONE_HUNDRED)
        };

        Self {
            display_name: holding.display_name.clone(),
            identifier: holding.identifier.clone(),
            quantity: holding.quantity,
            cost: contribution.cost.trunc(),
            value: contribution.value.trunc(),
            profit_loss: contribution.profit_loss.trunc(),
            price_ratio,
            purchase_price: holding.purchase_price,
            current_price: holding.current_price,
            previous_price: holding.previous_price,
            daily_delta,
            daily_delta_percent,
            trend: Trend::of(holding, basis),
        }
    }
}

/// Rows and totals of one market within one view.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MarketSection {
    pub view: HoldingView,
    pub market: Market,
    pub rows: Vec<HoldingRow>,
    pub totals: MarketTotals,
}
