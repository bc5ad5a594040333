use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::portfolio::holdings::{HoldingView, SkippedHolding};
use crate::portfolio::valuation::MarketSection;
use crate::resolver::Market;

/// Result of one run: every view's market sections plus the holdings that
/// were left out.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioReport {
    pub reporting_currency: String,
    pub foreign_currency: String,
    /// Reporting-currency units per one foreign-currency unit.
    pub exchange_rate: Decimal,
    /// Aggregated-view sections first, then per-lot; domestic before foreign
    /// within each view.
    pub sections: Vec<MarketSection>,
    pub skipped: Vec<SkippedHolding>,
    pub generated_at: DateTime<Utc>,
}

impl PortfolioReport {
    pub fn sections_for(&self, view: HoldingView) -> impl Iterator<Item = &MarketSection> {
        self.sections.iter().filter(move |s| s.view == view)
    }

    pub fn section(&self, view: HoldingView, market: Market) -> Option<&MarketSection> {
        self.sections
            .iter()
            .find(|s| s.view == view && s.market == market)
    }
}
